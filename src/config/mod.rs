// Configuration module entry point
// Loads layered settings and validates them into the immutable server config

mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::http::headers::BaseHeaders;
use crate::http::mime::MimeTable;

// Re-export public types
pub use types::{FilesSettings, HttpSettings, ServerConfig, ServerSettings, Settings};

pub const DEFAULT_PORT: u16 = 8000;

impl Settings {
    /// Load settings from built-in defaults, with an optional port override
    ///
    /// There is no file or environment source; the command line port is the
    /// only override layer.
    pub fn load(port: Option<u16>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("http.server_name", concat!("corserve/", env!("CARGO_PKG_VERSION")))?
            .set_default("http.default_content_type", "application/octet-stream")?
            .set_default("http.allow_origin", "*")?
            .set_default("http.allow_methods", "GET, POST, OPTIONS")?
            .set_default("http.allow_headers", "X-Requested-With, Content-Type")?
            .set_default("http.cache_control", "no-store, no-cache, must-revalidate")?
            .set_default("files.root", ".")?
            .set_default("files.index_files", vec!["index.html", "index.htm"])?
            .set_default("files.directory_listing", true)?
            .set_override_option("server.port", port.map(i64::from))?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl ServerConfig {
    /// Validate settings into a runtime configuration
    ///
    /// Fails when the address does not parse, the root is missing or not a
    /// directory, or a header value is not a valid HTTP header value.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let addr = get_socket_addr(&settings.server.host, settings.server.port)?;

        let root = settings
            .files
            .root
            .canonicalize()
            .map_err(|source| ConfigError::Root {
                path: settings.files.root.clone(),
                source,
            })?;
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory { path: root });
        }

        let base_headers = BaseHeaders::from_settings(&settings.http)?;
        let content_types = MimeTable::with_defaults(&settings.http.default_content_type);

        Ok(Self {
            addr,
            root,
            index_files: settings.files.index_files.clone(),
            directory_listing: settings.files.directory_listing,
            base_headers,
            content_types: Arc::new(content_types),
        })
    }
}

fn get_socket_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    // An empty host means all interfaces
    let host = if host.is_empty() { "0.0.0.0" } else { host };
    let addr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    };
    addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
        addr,
        reason: e.to_string(),
    })
}
