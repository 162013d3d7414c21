pub mod model;
pub mod ports;
pub mod services;
