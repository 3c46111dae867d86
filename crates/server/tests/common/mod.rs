//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with the OpenAI-compatible
//! provider pointed at an `httpmock::MockServer`, so the endpoint tests run
//! the whole request path without leaving the machine.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use listing_gen_server::{
    config::AppConfig,
    router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a credential set and the provider pointed at the mock.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    /// Like `spawn`, but lets the caller adjust the configuration first.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        let mock_server = MockServer::start();
        let mut config = AppConfig {
            port: 0,
            openai_api_key: Some("test-key".to_string()),
            ai_api_url: Some(mock_server.url(CHAT_COMPLETIONS_PATH)),
            ai_model: "mock-chat-model".to_string(),
            ..Default::default()
        };
        customize(&mut config);

        let app_state = build_app_state(config);
        TestApp::spawn_with_state(app_state, mock_server).await
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// An OpenAI-style chat completion whose first choice carries `content`.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
