pub mod age;
pub mod bmi;
pub mod calculator;
pub mod convert;
pub mod json_format;
pub mod password;
pub mod text;
