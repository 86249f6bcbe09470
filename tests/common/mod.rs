//! Shared utilities for integration tests.

#![allow(dead_code)]

use products_api::config::ServiceConfig;
use products_api::store::{ProductStore, SharedStore};
use products_api::{HttpServer, Shutdown};
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::net::TcpListener;

/// A server running on an ephemeral port with its own fresh store.
pub struct TestServer {
    /// Base URL of the product collection, without trailing slash.
    pub url: String,
    /// Root URL of the server.
    pub root: String,
    pub store: SharedStore,
    pub client: Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn item(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.url, id)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with the default config on 127.0.0.1:0.
pub async fn spawn_server() -> TestServer {
    spawn_server_with(ServiceConfig::default()).await
}

/// Start a server with `config`, forcing an ephemeral local port.
pub async fn spawn_server_with(mut config: ServiceConfig) -> TestServer {
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;

    let listener = TcpListener::bind(config.listener.bind_address())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let mount = config.api.mount_path.trim_end_matches('/').to_string();
    let store = ProductStore::shared();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store.clone());
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        url: format!("http://{}{}", addr, mount),
        root: format!("http://{}", addr),
        store,
        client,
        shutdown,
    }
}

/// Decode a JSON response body.
pub async fn body_json(res: Response) -> Value {
    res.json().await.unwrap()
}

/// Decode an error body and return its message.
pub async fn message(res: Response) -> String {
    let body = body_json(res).await;
    let obj = body.as_object().expect("error body is an object");
    assert_eq!(obj.len(), 1, "error body carries only a message: {body}");
    obj["message"].as_str().unwrap().to_string()
}
