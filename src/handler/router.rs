//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method dispatch, then the base
//! header set on whatever response comes back.

use crate::config::ServerConfig;
use crate::handler::static_files;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<ServerConfig>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _) = req.into_parts();

    let mut response = match parts.method {
        Method::OPTIONS => http::build_options_response(),
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                path: parts.uri.path(),
                query: parts.uri.query(),
                is_head: parts.method == Method::HEAD,
            };
            static_files::serve(&ctx, &config).await
        }
        _ => http::build_405_response(),
    };

    config.base_headers.apply(response.headers_mut());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use http_body_util::BodyExt;
    use std::fs;

    const BASE_HEADERS: [(&str, &str); 4] = [
        ("access-control-allow-origin", "*"),
        ("access-control-allow-methods", "GET, POST, OPTIONS"),
        (
            "access-control-allow-headers",
            "X-Requested-With, Content-Type",
        ),
        ("cache-control", "no-store, no-cache, must-revalidate"),
    ];

    fn setup() -> (tempfile::TempDir, Arc<ServerConfig>) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1);").unwrap();
        fs::write(dir.path().join("LICENSE"), "MIT").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/index.htm"), "docs").unwrap();

        let mut settings = Settings::load(None).unwrap();
        settings.files.root = dir.path().to_path_buf();
        let config = ServerConfig::from_settings(&settings).unwrap();
        (dir, Arc::new(config))
    }

    async fn send(
        config: &Arc<ServerConfig>,
        method: Method,
        uri: &str,
    ) -> (Response<Full<Bytes>>, Bytes) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap();
        let resp = handle_request(req, Arc::clone(config)).await.unwrap();
        let (parts, body) = resp.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        (Response::from_parts(parts, Full::new(Bytes::new())), bytes)
    }

    fn assert_base_headers(resp: &Response<Full<Bytes>>) {
        for (name, value) in BASE_HEADERS {
            assert_eq!(resp.headers()[name], value, "header {name}");
        }
    }

    #[tokio::test]
    async fn test_get_file() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::GET, "/index.html").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(resp.headers()["content-length"], "11");
        assert!(resp.headers().contains_key("last-modified"));
        assert_eq!(body, "<h1>hi</h1>");
        assert_base_headers(&resp);
    }

    #[tokio::test]
    async fn test_content_types() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "/app.js").await;
        assert_eq!(resp.headers()["content-type"], "application/javascript");

        let (resp, _) = send(&config, Method::GET, "/LICENSE").await;
        assert_eq!(resp.headers()["content-type"], "application/octet-stream");

        let (resp, body) = send(&config, Method::GET, "/assets/logo.png").await;
        assert_eq!(resp.headers()["content-type"], "image/png");
        assert_eq!(body.as_ref(), &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_query_string_ignored() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::GET, "/app.js?v=3").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body, "console.log(1);");
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::HEAD, "/index.html").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "11");
        assert!(body.is_empty());
        assert_base_headers(&resp);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "/missing.txt").await;
        assert_eq!(resp.status(), 404);
        assert_base_headers(&resp);
    }

    #[tokio::test]
    async fn test_traversal_is_404() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "/../../etc/passwd").await;
        assert_eq!(resp.status(), 404);
        assert_base_headers(&resp);

        let (resp, _) = send(&config, Method::GET, "/%2e%2e/%2e%2e/etc/passwd").await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_options() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::OPTIONS, "/anything").await;
        assert_eq!(resp.status(), 200);
        assert!(body.is_empty());
        assert!(!resp.headers().contains_key("content-type"));
        assert_base_headers(&resp);
    }

    #[tokio::test]
    async fn test_other_methods_not_allowed() {
        let (_dir, config) = setup();
        for method in [Method::DELETE, Method::POST, Method::PUT, Method::PATCH] {
            let (resp, _) = send(&config, method, "/index.html").await;
            assert_eq!(resp.status(), 405);
            assert_eq!(resp.headers()["allow"], "GET, HEAD, OPTIONS");
            assert_base_headers(&resp);
        }
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::GET, "/").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html");
        assert_eq!(body, "<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_second_index_name() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::GET, "/docs/").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body, "docs");
    }

    #[tokio::test]
    async fn test_directory_redirect() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "/docs?page=2").await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["location"], "/docs/?page=2");
        assert_base_headers(&resp);
    }

    #[tokio::test]
    async fn test_directory_redirect_stays_on_host() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "//docs").await;
        assert_eq!(resp.status(), 301);
        assert_eq!(resp.headers()["location"], "/docs/");
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let (_dir, config) = setup();
        let (resp, body) = send(&config, Method::GET, "/assets/").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Directory listing for /assets/"));
        assert!(html.contains(r#"<a href="logo.png">logo.png</a>"#));
    }

    #[tokio::test]
    async fn test_directory_listing_disabled() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        let mut settings = Settings::load(None).unwrap();
        settings.files.root = dir.path().to_path_buf();
        settings.files.directory_listing = false;
        let config = Arc::new(ServerConfig::from_settings(&settings).unwrap());

        let (resp, _) = send(&config, Method::GET, "/empty/").await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_file_with_trailing_slash() {
        let (_dir, config) = setup();
        let (resp, _) = send(&config, Method::GET, "/index.html/").await;
        assert_eq!(resp.status(), 404);
    }
}
