//! Middleware stages of the request pipeline.
//!
//! The two stages mirror the client's outgoing/error interception contract:
//! authentication is injected on the way out, and a narrow class of
//! transient failures is absorbed by a single bounded retry on the way back.

use std::time::Duration;

use http::Extensions;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};

use crate::session::SessionStore;

/// Attaches the stored bearer token to every outgoing request.
///
/// A no-op while signed out. Because this stage sits inside the retry
/// stage, a retried request picks up the token again as well.
pub struct BearerAuth {
    sessions: SessionStore,
}

impl BearerAuth {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }
}

#[async_trait::async_trait]
impl Middleware for BearerAuth {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if let Some(token) = self.sessions.token().await {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    req.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(e) => log::warn!("Stored token is not a valid header value: {e}"),
            }
        }
        next.run(req, extensions).await
    }
}

/// Retries an eligible failed request exactly once after a fixed delay.
///
/// Eligibility is decided by [`should_retry`]: the failure must be
/// transient (network-level, or a server-error status), the request must
/// not have been retried before, and the method must be a read (GET).
/// The outcome of the final attempt is always propagated to the caller; a
/// failure is logged with a status-class diagnostic first.
pub struct RetryOnce {
    delay: Duration,
}

impl RetryOnce {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Middleware for RetryOnce {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        // Requests with streaming bodies cannot be replayed.
        let replay = req.try_clone();
        let outcome = next.clone().run(req, extensions).await;

        if should_retry(&method, is_transient(&outcome), 0) {
            if let Some(replay) = replay {
                log::warn!(
                    "Transient failure for {method} {}, retrying once in {:?}",
                    replay.url(),
                    self.delay
                );
                tokio::time::sleep(self.delay).await;
                let retried = next.run(replay, extensions).await;
                log_failure(&retried);
                return retried;
            }
        }

        log_failure(&outcome);
        outcome
    }
}

/// Whether an outcome is a transient failure: no response was received at
/// all, or the server answered with a status in the 5xx range.
pub fn is_transient(outcome: &reqwest_middleware::Result<Response>) -> bool {
    match outcome {
        Err(_) => true,
        Ok(response) => response.status().is_server_error(),
    }
}

/// Retry-eligibility policy: a transient failure of a read request that has
/// not been retried yet. Every request is retried at most once.
pub fn should_retry(method: &Method, transient: bool, attempt: u32) -> bool {
    transient && attempt == 0 && *method == Method::GET
}

/// Logs a human-readable diagnostic for a failed outcome, classified by
/// status code. Successful responses are left alone.
fn log_failure(outcome: &reqwest_middleware::Result<Response>) {
    match outcome {
        Err(error) => {
            log::error!("Network error: no response received from server: {error}");
        }
        Ok(response) => {
            let status = response.status();
            match status.as_u16() {
                401 => log::error!("Unauthorized: authentication required"),
                403 => log::error!("Forbidden: no permission to access this resource"),
                404 => log::error!("Not found: the requested resource does not exist"),
                400 => log::error!("Bad request: {}", response.url()),
                500 => log::error!("Server error: something went wrong on the server"),
                code if !status.is_success() => log::error!("Response error: {code}"),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_transient_get_attempt_is_retried() {
        assert!(should_retry(&Method::GET, true, 0));
        // already retried once
        assert!(!should_retry(&Method::GET, true, 1));
        // not a transient failure
        assert!(!should_retry(&Method::GET, false, 0));
    }

    #[test]
    fn writes_are_never_retried() {
        assert!(!should_retry(&Method::POST, true, 0));
        assert!(!should_retry(&Method::DELETE, true, 0));
        assert!(!should_retry(&Method::PUT, true, 0));
    }
}
