//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use hsh_router::{AppConfig, AppServer, Shutdown};
use tokio::net::TcpListener;

/// Config rooted at `base` with otherwise default settings.
pub fn config_with_base(base: &str) -> AppConfig {
    AppConfig {
        base_url: base.to_string(),
        ..AppConfig::default()
    }
}

/// Start a server on an ephemeral port; returns its address and shutdown handle.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = AppServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
