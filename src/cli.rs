//! Command line interface

use clap::Parser;

/// Serve the current directory over HTTP with permissive CORS headers
#[derive(Debug, Clone, Parser)]
#[command(name = "corserve")]
#[command(version)]
#[command(about = "Serve the current directory over HTTP with CORS headers")]
pub struct Cli {
    /// Port to listen on (all interfaces) [default: 8000]
    pub port: Option<u16>,
}
