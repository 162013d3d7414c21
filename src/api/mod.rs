pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
