use marquee_api::{ApiClient, SessionStore};
use marquee_bridge::config::Config;

/// The core application state that holds configuration, the shared API
/// client, and the session store.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
#[derive(Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: Config,
    /// Shared request pipeline for the remote movie API.
    pub api: ApiClient,
    /// Shared credential storage, read by the pipeline and written by the
    /// authentication flows.
    pub sessions: SessionStore,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
