//! corserve
//!
//! Static file server for local development. Serves a document root over
//! HTTP/1.1 and adds CORS and no-cache headers to every response.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::{ServerConfig, Settings};
pub use error::{ConfigError, Error};
pub use server::Server;
