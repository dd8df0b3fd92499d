// Server module entry point
// Binds the listener and runs the accept loop until shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is renamed
#[path = "loop.rs"]
pub mod server_loop;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::Error;
use crate::logger;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::start_server_loop;

/// A bound static file server
pub struct Server {
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Bind the configured address
    ///
    /// Must be called from within a Tokio runtime. A port already in use is
    /// reported as [`Error::Bind`].
    pub fn bind(config: ServerConfig) -> Result<Self, Error> {
        let addr = config.addr;
        let listener = create_listener(addr).map_err(|source| Error::Bind { addr, source })?;
        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<(), Error> {
        self.run_until(signal::shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        logger::log_server_start(&addr, &self.config);
        start_server_loop(self.listener, self.config, shutdown).await;
        Ok(())
    }
}
