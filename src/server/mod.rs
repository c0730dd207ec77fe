pub mod config;
mod http_layers;
mod response;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub use response::ApiError;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
