//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, filesystem), and emit events
//! or notifications back to the frontend.

pub mod auth_service;
pub mod catalog_service;
pub mod config_service;
pub mod subscription_service;
pub mod watchlist_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::AppContext>;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use marquee_api::{ApiClient, SessionStore};
    use marquee_bridge::MessageFromBackend;
    use marquee_bridge::config::Config;
    use marquee_bridge::session::Session;
    use tokio::sync::{RwLock, mpsc};

    use crate::state::State;

    /// Builds a handler context around the given config, returning the
    /// receiving end of the frontend channel for assertions. The API base
    /// URL points at a closed port so any unexpected network call fails
    /// fast instead of hanging.
    pub(crate) fn test_context(
        mut config: Config,
        session: Option<Session>,
    ) -> (
        super::AppContextHandle,
        mpsc::Receiver<MessageFromBackend>,
    ) {
        config.api.base_url = "http://127.0.0.1:1".to_string();
        let (tx, rx) = mpsc::channel(16);
        let sessions = SessionStore::new(session);
        let api =
            ApiClient::new(&config.api, sessions.clone()).expect("failed to build test client");
        let state = Arc::new(RwLock::new(State {
            config,
            api,
            sessions,
        }));
        (Arc::new(crate::AppContext { state, tx }), rx)
    }
}
