//! Typed endpoint wrappers over the middleware-enabled HTTP client.

use std::time::Duration;

use marquee_bridge::config::ApiConfig;
use marquee_bridge::movie::{CatalogSection, Movie, WatchlistEntry};
use marquee_bridge::session::Session;
use reqwest::Url;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{BearerAuth, RetryOnce};
use crate::session::SessionStore;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "confirmPassword")]
    confirm_password: &'a str,
}

#[derive(Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
}

/// The single shared entry point for all outbound HTTP calls.
///
/// Credentials and the single-shot retry policy are applied transparently
/// by the middleware stack; see the crate-level docs.
#[derive(Clone)]
pub struct ApiClient {
    http: ClientWithMiddleware,
    base_url: Url,
}

impl ApiClient {
    /// Builds the client from config, wiring the session store into the
    /// auth middleware. The retry stage is added first so a retried request
    /// passes through auth injection again.
    pub fn new(config: &ApiConfig, sessions: SessionStore) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let http = ClientBuilder::new(client)
            .with(RetryOnce::new(Duration::from_millis(config.retry_delay_ms)))
            .with(BearerAuth::new(sessions))
            .build();
        Ok(Self { http, base_url })
    }

    /// Exchanges credentials for a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.base_url.join("/api/auth/login")?;
        let body = LoginBody { username, password };
        let response = self.execute(self.http.post(url).json(&body)).await?;
        Ok(response.json().await?)
    }

    /// Creates an account and returns the freshly issued session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, ApiError> {
        let url = self.base_url.join("/api/auth/register")?;
        let body = RegisterBody {
            username,
            email,
            password,
            confirm_password,
        };
        let response = self.execute(self.http.post(url).json(&body)).await?;
        Ok(response.json().await?)
    }

    /// Fetches the full watchlist of the signed-in user.
    pub async fn watchlist_all(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
        let url = self.base_url.join("/api/watchlist/get-all")?;
        let response = self.execute(self.http.get(url)).await?;
        Ok(response.json().await?)
    }

    /// Adds a movie to the watchlist. The server answers without a body.
    pub async fn watchlist_add(&self, movie_id: u64) -> Result<(), ApiError> {
        let url = self.base_url.join(&format!("/api/watchlist/{movie_id}"))?;
        self.execute(self.http.post(url)).await?;
        Ok(())
    }

    /// Removes a movie from the watchlist.
    pub async fn watchlist_remove(&self, movie_id: u64) -> Result<(), ApiError> {
        let url = self.base_url.join(&format!("/api/watchlist/{movie_id}"))?;
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }

    /// Fetches one catalog section as a plain array of movie records.
    pub async fn catalog(&self, section: CatalogSection, page: u32) -> Result<Vec<Movie>, ApiError> {
        let url = self
            .base_url
            .join(&format!("/movie/{}", section.path_segment()))?;
        let response = self
            .execute(self.http.get(url).query(&[("page", page)]))
            .await?;
        Ok(response.json().await?)
    }

    /// Subscribes an email address to the weekly release digest.
    pub async fn subscribe(&self, email: &str) -> Result<(), ApiError> {
        let url = self.base_url.join("/subscriptions")?;
        let body = SubscribeBody { email };
        self.execute(self.http.post(url).json(&body)).await?;
        Ok(())
    }

    /// Sends the request and converts a non-success status into
    /// [`ApiError::Status`], keeping the error body for message extraction.
    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), body))
        }
    }
}
