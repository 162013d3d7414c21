pub mod contact_log;

pub use contact_log::FileContactLog;
