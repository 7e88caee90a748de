//! Watchlist fetch/add/remove flows.
//!
//! Fetching requires a stored token; without one the backend answers with
//! `AuthRequired` and the frontend switches to the login view without a
//! server round trip. A successful add broadcasts `WatchlistUpdated` so the
//! watchlist view can refresh itself.

use marquee_bridge::MessageFromBackend;
use marquee_bridge::notification::NotificationCategory;

/// Handles a watchlist fetch request (see
/// [`marquee_bridge::MessageToBackend::WatchlistFetchRequest`]).
pub async fn handle_fetch(context: super::AppContextHandle) {
    let (api, sessions) = {
        let state = context.state.read().await;
        (state.api.clone(), state.sessions.clone())
    };

    if sessions.token().await.is_none() {
        context.send(MessageFromBackend::AuthRequired).await;
        return;
    }

    match api.watchlist_all().await {
        Ok(entries) => {
            context
                .send(MessageFromBackend::WatchlistResponse(entries))
                .await;
        }
        Err(e) => {
            context
                .send(MessageFromBackend::WatchlistFailed(
                    e.user_message("Failed to load watchlist"),
                ))
                .await;
        }
    }
}

/// Handles an add-to-watchlist request (see
/// [`marquee_bridge::MessageToBackend::WatchlistAddRequest`]).
pub async fn handle_add(context: super::AppContextHandle, movie_id: u64) {
    let (api, sessions) = {
        let state = context.state.read().await;
        (state.api.clone(), state.sessions.clone())
    };

    if sessions.token().await.is_none() {
        context.send(MessageFromBackend::AuthRequired).await;
        return;
    }

    match api.watchlist_add(movie_id).await {
        Ok(()) => {
            context
                .send_notification(NotificationCategory::Success, "Added to watchlist")
                .await;
            context.send(MessageFromBackend::WatchlistUpdated).await;
        }
        Err(e) => {
            context
                .send_notification(NotificationCategory::Error, e.user_message("Failed to add"))
                .await;
        }
    }
}

/// Handles a remove-from-watchlist request (see
/// [`marquee_bridge::MessageToBackend::WatchlistRemoveRequest`]).
pub async fn handle_remove(context: super::AppContextHandle, movie_id: u64) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.watchlist_remove(movie_id).await {
        Ok(()) => {
            context
                .send(MessageFromBackend::WatchlistRemoved(movie_id))
                .await;
        }
        Err(e) => {
            context
                .send(MessageFromBackend::WatchlistFailed(
                    e.user_message("Failed to remove"),
                ))
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use marquee_bridge::config::Config;

    use super::*;
    use crate::services::testing::test_context;

    #[tokio::test]
    async fn fetch_without_a_token_redirects_to_login() {
        let (context, mut rx) = test_context(Config::default(), None);
        handle_fetch(context).await;

        assert!(matches!(
            rx.recv().await,
            Some(MessageFromBackend::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn add_without_a_token_redirects_to_login() {
        let (context, mut rx) = test_context(Config::default(), None);
        handle_add(context, 3).await;

        assert!(matches!(
            rx.recv().await,
            Some(MessageFromBackend::AuthRequired)
        ));
    }
}
