pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::FileContactLog;
pub use api::routes::create_router;
pub use api::server::{Server, ServerConfig};
pub use api::state::AppState;
pub use config::{AppConfig, CliConfig};
pub use utils::error::{Result, ToolError};
