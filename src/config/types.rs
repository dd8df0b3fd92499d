// Configuration types module
// Settings as deserialized from the config builder, plus the immutable runtime config

use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::http::headers::BaseHeaders;
use crate::http::mime::ContentTypeResolver;

/// Layered settings, before validation
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub http: HttpSettings,
    pub files: FilesSettings,
}

/// Listener settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Response header settings
#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    pub server_name: String,
    pub default_content_type: String,
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
    pub cache_control: String,
}

/// Document root settings
#[derive(Debug, Deserialize, Clone)]
pub struct FilesSettings {
    pub root: PathBuf,
    pub index_files: Vec<String>,
    pub directory_listing: bool,
}

/// Immutable server configuration
///
/// Built once at startup and shared read-only with every connection.
#[derive(Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Canonicalized document root
    pub root: PathBuf,
    pub index_files: Vec<String>,
    pub directory_listing: bool,
    pub base_headers: BaseHeaders,
    pub content_types: Arc<dyn ContentTypeResolver>,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("addr", &self.addr)
            .field("root", &self.root)
            .field("index_files", &self.index_files)
            .field("directory_listing", &self.directory_listing)
            .field("base_headers", &self.base_headers)
            .finish_non_exhaustive()
    }
}
