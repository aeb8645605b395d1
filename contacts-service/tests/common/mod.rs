#![allow(dead_code)]

use std::sync::Arc;

use auth::TokenCodec;
use contacts_service::contact::service::ContactService;
use contacts_service::inbound::http::router::create_router;
use contacts_service::repositories::InMemoryContactRepository;
use contacts_service::repositories::InMemoryCredentialStore;
use contacts_service::user::guard::AccessGuard;
use contacts_service::user::service::AuthService;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub credential_store: InMemoryCredentialStore,
    pub api_client: reqwest::Client,
    pub token_codec: Arc<TokenCodec>,
}

impl TestApp {
    /// Spawn the application with the default 15 minute token lifetime
    pub async fn spawn() -> Self {
        Self::spawn_with_token_ttl(chrono::Duration::minutes(15)).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_with_token_ttl(token_ttl: chrono::Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let credential_store = InMemoryCredentialStore::new();
        let store = Arc::new(credential_store.clone());
        let token_codec = Arc::new(TokenCodec::new(TEST_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&store),
            Arc::clone(&token_codec),
            token_ttl,
        ));
        let access_guard = Arc::new(AccessGuard::new(store, Arc::clone(&token_codec)));
        let contact_service = Arc::new(ContactService::new(Arc::new(
            InMemoryContactRepository::new(),
        )));

        let router = create_router(auth_service, access_guard, contact_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            credential_store,
            api_client: reqwest::Client::new(),
            token_codec,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the raw response
    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/register")
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the token form and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/token")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return the access token
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self.register(email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self.login(email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }
}
