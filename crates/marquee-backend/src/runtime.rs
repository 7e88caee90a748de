//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use marquee_api::{ApiClient, SessionStore};
use marquee_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");

    let stored_session = match crate::config::load_session().await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Could not load stored session, starting signed out: {e}");
            None
        }
    };

    let sessions = SessionStore::new(stored_session);
    let api = ApiClient::new(&config.api, sessions.clone())
        .expect("failed to construct the API client");

    let state = Arc::new(RwLock::new(State {
        config,
        api,
        sessions,
    }));

    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
