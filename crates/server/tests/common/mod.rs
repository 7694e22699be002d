//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `prodesc-server`
//! integration tests. `TestApp` spawns the real router on a random port with
//! an `httpmock::MockServer` standing in for the Ollama backend.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use prodesc_server::{config::AppConfig, serve_with_shutdown};
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    server_handle: Option<JoinHandle<anyhow::Result<()>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server with a mock Ollama backend.
    pub async fn spawn() -> Result<Self> {
        prodesc_test_utils::setup_tracing();

        let mock_server = MockServer::start_async().await;
        let mut config = AppConfig::default();
        config.port = 0;
        config.backend.api_url = mock_server.base_url();
        config.backend.model = "mock-model".to_string();
        config.backend.timeout_secs = 5;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(serve_with_shutdown(listener, config, async {
            shutdown_rx.await.ok();
        }));

        // Give the server a moment to start up.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            server_handle: Some(server_handle),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    /// Stops the server and waits for it to finish, surfacing any server error.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.server_handle.take() {
            handle.await??;
        }
        Ok(())
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
