//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use web_dispatch::config::ServerConfig;
use web_dispatch::lifecycle::Shutdown;
use web_dispatch::{ApplicationContext, HttpServer};

/// Spawn a server around the given context on an ephemeral port.
///
/// Returns the bound address and the shutdown coordinator; dropping the
/// coordinator (or triggering it) stops the server.
pub async fn spawn_app(context: ApplicationContext) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServerConfig {
        bind_address: addr.to_string(),
        ..ServerConfig::default()
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(Arc::new(context), config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Let the accept loop come up
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// A client that never routes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
