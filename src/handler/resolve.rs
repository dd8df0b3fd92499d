//! Path resolution module
//!
//! Maps a request path onto the document root. A resolved path is always
//! inside the root, symlinks included.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::logger;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("path does not exist")]
    NotFound,
    #[error("path escapes the document root")]
    Traversal,
}

/// Filesystem target for a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Canonical filesystem path, under the root
    pub fs_path: PathBuf,
    /// Whether the request path ended with `/`
    pub trailing_slash: bool,
}

/// Resolve `request_path` (without query string) under `root`
///
/// `root` must already be canonical.
pub fn resolve_path(root: &Path, request_path: &str) -> Result<ResolvedPath, ResolveError> {
    let decoded = percent_decode_str(request_path)
        .decode_utf8()
        .map_err(|_| ResolveError::NotFound)?;

    let mut candidate = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                log_traversal(request_path, "parent segment");
                return Err(ResolveError::Traversal);
            }
            s if s.contains(['\\', '\0']) => {
                log_traversal(request_path, "invalid segment");
                return Err(ResolveError::Traversal);
            }
            s => candidate.push(s),
        }
    }

    // Missing files are the common 404 case, not worth logging
    let fs_path = candidate.canonicalize().map_err(|_| ResolveError::NotFound)?;
    if !fs_path.starts_with(root) {
        log_traversal(request_path, &fs_path.display().to_string());
        return Err(ResolveError::Traversal);
    }

    Ok(ResolvedPath {
        fs_path,
        trailing_slash: decoded.ends_with('/'),
    })
}

fn log_traversal(request_path: &str, detail: &str) {
    logger::log_warning(&format!(
        "Path traversal attempt blocked: {request_path} -> {detail}"
    ));
}
