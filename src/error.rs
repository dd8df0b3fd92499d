//! Error types
//!
//! Request-level failures never surface here: the handler turns them into
//! status responses. These are the startup failures that end the process.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal server error
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source} (is the port already in use?)")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Runtime error: {0}")]
    Runtime(#[from] io::Error),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("Document root '{}' is not accessible: {source}", .path.display())]
    Root { path: PathBuf, source: io::Error },

    #[error("Document root '{}' is not a directory", .path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("Invalid value for header '{name}'")]
    InvalidHeader { name: String },
}
