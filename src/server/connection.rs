// Connection handling module
// Serves a single TCP connection with hyper's HTTP/1 implementation

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::ServerConfig;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// Request parsing, keep-alive and malformed-request replies (400) are left
/// to hyper; every parsed request goes to the static file handler.
pub fn spawn_connection(stream: TcpStream, peer_addr: SocketAddr, config: Arc<ServerConfig>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&config))),
        );

        if let Err(err) = conn.await {
            // Clients dropping idle keep-alive connections is routine
            if !err.is_incomplete_message() {
                logger::log_error(&format!("Failed to serve connection from {peer_addr}: {err}"));
            }
        }
    });
}
