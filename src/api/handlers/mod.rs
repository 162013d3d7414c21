mod age;
mod bmi;
mod calculate;
mod contact;
mod convert;
mod format_json;
mod health;
mod password;
mod text;

pub use age::age;
pub use bmi::bmi;
pub use calculate::calculate;
pub use contact::contact;
pub use convert::convert;
pub use format_json::format_json;
pub use health::health;
pub use password::password;
pub use text::text_process;
