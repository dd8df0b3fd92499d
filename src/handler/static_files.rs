//! Static file serving module
//!
//! Serves files and directories under the document root.

use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use hyper::body::Bytes;
use hyper::Response;
use http_body_util::Full;
use tokio::fs;

use crate::config::ServerConfig;
use crate::handler::listing;
use crate::handler::resolve::{self, ResolvedPath};
use crate::handler::router::RequestContext;
use crate::http::{self, response};
use crate::logger;

/// Serve a GET/HEAD request from the document root
pub async fn serve(ctx: &RequestContext<'_>, config: &ServerConfig) -> Response<Full<Bytes>> {
    let Ok(resolved) = resolve::resolve_path(&config.root, ctx.path) else {
        return http::build_404_response();
    };

    let metadata = match fs::metadata(&resolved.fs_path).await {
        Ok(m) => m,
        Err(e) => return io_error_response(&resolved.fs_path, &e),
    };

    if metadata.is_dir() {
        return serve_directory(ctx, config, &resolved).await;
    }

    // A file addressed like a directory does not exist
    if !metadata.is_file() || resolved.trailing_slash {
        return http::build_404_response();
    }

    serve_file(ctx, config, &resolved.fs_path, &metadata).await
}

/// Serve a directory: redirect, index file, or listing
async fn serve_directory(
    ctx: &RequestContext<'_>,
    config: &ServerConfig,
    resolved: &ResolvedPath,
) -> Response<Full<Bytes>> {
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&redirect_target(ctx.path, ctx.query));
    }

    for index_file in &config.index_files {
        let index_path = resolved.fs_path.join(index_file);
        if let Ok(metadata) = fs::metadata(&index_path).await {
            if metadata.is_file() {
                return serve_file(ctx, config, &index_path, &metadata).await;
            }
        }
    }

    if !config.directory_listing {
        return http::build_404_response();
    }

    match listing::read_entries(&resolved.fs_path).await {
        Ok(entries) => {
            let html = listing::render_listing(ctx.path, &entries);
            response::build_html_response(html, ctx.is_head)
        }
        Err(e) => {
            logger::log_warning(&format!(
                "Cannot list directory '{}': {e}",
                resolved.fs_path.display()
            ));
            http::build_404_response()
        }
    }
}

/// Location for a directory requested without its trailing slash
///
/// Leading slashes are collapsed so `//host` cannot become a
/// scheme-relative URL pointing at another host.
fn redirect_target(path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(q) => format!("/{path}/?{q}"),
        None => format!("/{path}/"),
    }
}

/// Serve a single file
///
/// HEAD takes its length from `metadata` and never reads the file.
async fn serve_file(
    ctx: &RequestContext<'_>,
    config: &ServerConfig,
    file_path: &Path,
    metadata: &Metadata,
) -> Response<Full<Bytes>> {
    let (body, content_length) = if ctx.is_head {
        (Bytes::new(), metadata.len())
    } else {
        match fs::read(file_path).await {
            Ok(c) => {
                let len = c.len() as u64;
                (Bytes::from(c), len)
            }
            Err(e) => return io_error_response(file_path, &e),
        }
    };

    let last_modified = metadata.modified().ok().map(format_http_date);
    let content_type = config.content_types.content_type(file_path);

    response::build_file_response(
        body,
        content_length,
        &content_type,
        last_modified.as_deref(),
    )
}

/// Map a filesystem error to 404 or 500
fn io_error_response(path: &Path, error: &io::Error) -> Response<Full<Bytes>> {
    if error.kind() == io::ErrorKind::NotFound {
        return http::build_404_response();
    }
    logger::log_error(&format!("Failed to read file '{}': {error}", path.display()));
    http::build_500_response()
}

/// Format a timestamp as an HTTP date (RFC 7231 IMF-fixdate)
pub fn format_http_date(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
