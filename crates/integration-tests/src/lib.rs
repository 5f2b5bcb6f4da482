//! Integration tests for Foodhub.
//!
//! Each test starts the real router in-process on an ephemeral port, backed by
//! a temporary data directory, and talks to it over HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodhub-integration-tests
//! ```

use std::path::Path;

use foodhub_core::{FoodItemsDocument, OwnersDocument, UsersDocument};
use foodhub_server::config::ServerConfig;
use foodhub_server::db::RecordStore;
use foodhub_server::state::AppState;
use reqwest::{Client, Response};
use serde::Serialize;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A running server plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    data_dir: TempDir,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a server over a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn new() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        Self::start(data_dir).await
    }

    /// Start a server over `data_dir`, creating missing data files first.
    ///
    /// # Panics
    ///
    /// Panics if the data files cannot be initialized or the listener
    /// cannot be bound.
    pub async fn start(data_dir: TempDir) -> Self {
        let config = ServerConfig {
            data_dir: data_dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        let state = AppState::new(config);
        state
            .store()
            .ensure_initialized()
            .await
            .expect("Failed to initialize data files");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = foodhub_server::app(state);
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            data_dir,
            server,
        }
    }

    /// Stop the server and hand back its data directory.
    pub async fn stop(self) -> TempDir {
        self.server.abort();
        let _ = self.server.await;
        self.data_dir
    }

    /// Directory holding the collection files.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// A store over the same files the server uses.
    pub fn store(&self) -> RecordStore {
        RecordStore::new(self.data_dir())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }

    /// # Panics
    ///
    /// Panics if the request cannot be sent.
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// # Panics
    ///
    /// Panics if a collection file cannot be loaded.
    pub async fn users(&self) -> UsersDocument {
        self.store().load().await.expect("Failed to load users")
    }

    /// # Panics
    ///
    /// Panics if a collection file cannot be loaded.
    pub async fn owners(&self) -> OwnersDocument {
        self.store().load().await.expect("Failed to load owners")
    }

    /// # Panics
    ///
    /// Panics if a collection file cannot be loaded.
    pub async fn food_items(&self) -> FoodItemsDocument {
        self.store().load().await.expect("Failed to load food items")
    }
}

/// Read a `{"message": ...}` body.
///
/// # Panics
///
/// Panics if the body is not such an object.
pub async fn message_of(response: Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Failed to read JSON body");
    body["message"]
        .as_str()
        .expect("Body has no message")
        .to_owned()
}
