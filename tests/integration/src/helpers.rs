//! Test helpers for integration tests
//!
//! Spawns the API on an ephemeral port and seeds users straight through the
//! repositories, since the API has no registration endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracker_api::{create_app, create_app_state, AppState};
use tracker_common::AppConfig;
use tracker_core::User;

use crate::fixtures::unique_suffix;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(mut config: AppConfig) -> Result<Self> {
        // Concurrent accept tests would otherwise trip the limiter
        config.rate_limit.requests_per_second = 1000;
        config.rate_limit.burst = 1000;

        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Insert a user and mint a token for it
    pub async fn create_user(&self, name: &str) -> Result<(User, String)> {
        let suffix = unique_suffix();
        let user = User::new(
            format!("{name} {suffix}"),
            format!("{}.{suffix}@example.com", name.to_lowercase()),
        );
        self.state
            .service_context()
            .user_repo()
            .create(&user)
            .await?;
        let token = self.state.jwt_service().issue_access_token(user.id)?;
        Ok((user, token))
    }

    fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", token))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body and no token
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::bearer(self.client.post(self.url(path)), token).json(body);
        Ok(request.send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::bearer(self.client.put(self.url(path)), token).json(body);
        Ok(request.send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::bearer(self.client.patch(self.url(path)), token).json(body);
        Ok(request.send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::bearer(self.client.delete(self.url(path)), token);
        Ok(request.send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for key in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(key).is_err() {
            eprintln!("Skipping test: {key} not set");
            return false;
        }
    }

    true
}

/// Fail with the response body when the status is not the expected one
async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    let body = response.text().await?;
    anyhow::bail!("Expected status {expected}, got {status}. Body: {body}")
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let response = expect_status(response, expected_status).await?;
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    expect_status(response, expected_status).await.map(drop)
}
