use std::sync::Arc;

use marquee_bridge::session::Session;
use tokio::sync::RwLock;

/// Shared handle to the stored session credential.
///
/// The request pipeline reads the token from here when building requests;
/// the authentication flows write to it on login, registration, and logout.
/// All access happens through a cheap cloneable handle so the auth
/// middleware and the services can share one store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Creates a store pre-populated with a session loaded from disk, if any.
    pub fn new(initial: Option<Session>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Returns a copy of the current session, if signed in.
    pub async fn get(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    /// Returns the current bearer token, if signed in.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.as_ref().map(|s| s.token.clone())
    }

    /// Replaces the stored session.
    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// Discards the stored session.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_follows_set_and_clear() {
        let store = SessionStore::default();
        assert!(store.token().await.is_none());

        store
            .set(Session {
                token: "abc123".to_string(),
                username: "alice".to_string(),
            })
            .await;
        assert_eq!(store.token().await.as_deref(), Some("abc123"));
        assert_eq!(store.get().await.map(|s| s.username).as_deref(), Some("alice"));

        store.clear().await;
        assert!(store.get().await.is_none());
    }
}
