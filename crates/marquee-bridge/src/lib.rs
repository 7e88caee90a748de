//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the user
//! interface with an asynchronous backend responsible for authentication,
//! watchlist management, catalog retrieval, and more against the remote
//! movie API.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., log in, add a movie to the
//!   watchlist, request a catalog section).
//! - The backend pushes events (e.g., session changes, watchlist contents,
//!   notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod movie;
pub mod notification;
pub mod session;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::movie::{CatalogSection, Movie, WatchlistEntry};

/// Identifies which authentication form an inline error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous events (e.g., notifications, watchlist changes).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// The current session, pushed on startup and whenever it changes
    /// (login, registration, logout). `None` means signed out.
    SessionUpdate(Option<session::Session>),
    /// A validation or server error to display inline on an auth form.
    AuthFormError {
        form: AuthForm,
        message: String,
    },
    /// A protected view was requested without a stored token; the frontend
    /// should switch to the login view without any server round trip.
    AuthRequired,
    /// One catalog section's worth of movies.
    CatalogResponse {
        section: CatalogSection,
        movies: Vec<Movie>,
    },
    /// The full contents of the user's watchlist.
    WatchlistResponse(Vec<WatchlistEntry>),
    /// Broadcast after a movie was successfully added to the watchlist so
    /// that the watchlist view can refresh itself.
    WatchlistUpdated,
    /// A single entry was removed from the watchlist.
    WatchlistRemoved(u64),
    /// The watchlist could not be loaded or changed; inline error text.
    WatchlistFailed(String),
    /// Outcome of a subscription attempt, shown inline under the form.
    SubscribeResponse {
        success: bool,
        message: String,
    },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the currently stored session, if any.
    SessionRequest,
    /// Attempt to sign in with the given credentials.
    LoginRequest {
        username: String,
        password: String,
    },
    /// Attempt to create an account.
    RegisterRequest {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    /// Discard the stored session.
    LogoutRequest,
    /// Request one catalog section (popular, top rated, upcoming).
    CatalogRequest {
        section: CatalogSection,
        page: u32,
    },
    /// Request the full watchlist for the signed-in user.
    WatchlistFetchRequest,
    /// Add a movie to the watchlist by its catalog id.
    WatchlistAddRequest(u64),
    /// Remove a movie from the watchlist by its catalog id.
    WatchlistRemoveRequest(u64),
    /// Subscribe an email address to the weekly release digest.
    SubscribeRequest {
        email: String,
    },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
