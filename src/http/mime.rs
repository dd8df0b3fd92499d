//! MIME type detection module
//!
//! Returns the Content-Type for a file path: the extension table first, then
//! `mime_guess`, then the configured default.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Content-type strategy selected when the server is constructed
pub trait ContentTypeResolver: Send + Sync {
    fn content_type(&self, path: &Path) -> Cow<'_, str>;
}

/// Extension table with a guessing fallback
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
    default_type: String,
}

/// Built-in extension table (extensions without the leading dot)
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("manifest", "text/cache-manifest"),
    ("html", "text/html"),
    ("png", "image/png"),
    ("jpg", "image/jpg"),
    ("svg", "image/svg+xml"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
];

impl MimeTable {
    /// Empty table that only guesses
    pub fn new(default_type: &str) -> Self {
        Self {
            types: HashMap::new(),
            default_type: default_type.to_string(),
        }
    }

    /// Table preloaded with the built-in types
    pub fn with_defaults(default_type: &str) -> Self {
        DEFAULT_TYPES
            .iter()
            .fold(Self::new(default_type), |table, (ext, ty)| {
                table.with_type(ext, ty)
            })
    }

    /// Add or replace an extension mapping
    #[must_use]
    pub fn with_type(mut self, extension: &str, content_type: &str) -> Self {
        self.types.insert(
            extension.trim_start_matches('.').to_ascii_lowercase(),
            content_type.to_string(),
        );
        self
    }

    /// Look up an extension in the table only
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.types
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl ContentTypeResolver for MimeTable {
    fn content_type(&self, path: &Path) -> Cow<'_, str> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Cow::Borrowed(&self.default_type);
        };

        if let Some(ty) = self.lookup(ext) {
            return Cow::Borrowed(ty);
        }

        mime_guess::from_ext(ext)
            .first_raw()
            .map_or(Cow::Borrowed(self.default_type.as_str()), Cow::Borrowed)
    }
}
