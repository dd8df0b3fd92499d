//! Logger module
//!
//! Console logging for the server lifecycle plus errors and warnings.
//! Info goes to stdout; errors and warnings go to stderr.

use std::net::SocketAddr;

use crate::config::ServerConfig;

/// Write to info log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

const BANNER_RULE: &str = "======================================";
const SHUTDOWN_MESSAGE: &str = "\nServer stopped.";

/// Startup banner, one entry per console line
pub fn server_start_lines(addr: &SocketAddr, config: &ServerConfig) -> Vec<String> {
    vec![
        BANNER_RULE.to_string(),
        format!("Server started on port {}", addr.port()),
        format!("Listening on: http://{addr}"),
        format!("Open in a browser: http://localhost:{}/", addr.port()),
        format!("Document root: {}", config.root.display()),
        "Press Ctrl+C to stop the server".to_string(),
        format!("{BANNER_RULE}\n"),
    ]
}

pub fn log_server_start(addr: &SocketAddr, config: &ServerConfig) {
    for line in server_start_lines(addr, config) {
        write_info(&line);
    }
}

pub fn log_shutdown() {
    write_info(SHUTDOWN_MESSAGE);
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_server_start_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::load(Some(8123)).unwrap();
        settings.files.root = dir.path().to_path_buf();
        let config = ServerConfig::from_settings(&settings).unwrap();

        let lines = server_start_lines(&config.addr, &config);
        assert!(lines.contains(&"Server started on port 8123".to_string()));
        assert!(lines.contains(&"Listening on: http://0.0.0.0:8123".to_string()));
        assert!(lines
            .iter()
            .any(|l| l == &format!("Document root: {}", config.root.display())));
        assert!(lines.iter().any(|l| l.contains("Ctrl+C")));
    }

    #[test]
    fn test_shutdown_message() {
        assert_eq!(SHUTDOWN_MESSAGE.trim(), "Server stopped.");
    }
}
