//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use marquee_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::SessionRequest => {
                services::auth_service::handle_session_request(self.clone()).await;
            }
            MessageToBackend::LoginRequest { username, password } => {
                services::auth_service::handle_login(self.clone(), username, password).await;
            }
            MessageToBackend::RegisterRequest {
                username,
                email,
                password,
                confirm_password,
            } => {
                services::auth_service::handle_register(
                    self.clone(),
                    username,
                    email,
                    password,
                    confirm_password,
                )
                .await;
            }
            MessageToBackend::LogoutRequest => {
                services::auth_service::handle_logout(self.clone()).await;
            }
            MessageToBackend::CatalogRequest { section, page } => {
                services::catalog_service::handle_catalog_request(self.clone(), section, page)
                    .await;
            }
            MessageToBackend::WatchlistFetchRequest => {
                services::watchlist_service::handle_fetch(self.clone()).await;
            }
            MessageToBackend::WatchlistAddRequest(movie_id) => {
                services::watchlist_service::handle_add(self.clone(), movie_id).await;
            }
            MessageToBackend::WatchlistRemoveRequest(movie_id) => {
                services::watchlist_service::handle_remove(self.clone(), movie_id).await;
            }
            MessageToBackend::SubscribeRequest { email } => {
                services::subscription_service::handle_subscribe(self.clone(), email).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        category: marquee_bridge::notification::NotificationCategory,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            marquee_bridge::notification::NotificationMessage {
                category,
                message: content.into(),
            },
        ))
        .await;
    }
}
