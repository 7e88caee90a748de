//! Weekly release digest subscriptions.
//!
//! Like the catalog, the mock behavior is the authoritative contract: while
//! `use_mock_catalog` is on, the subscribe call is simulated with a short
//! delay and always succeeds. The live path posts to `/subscriptions`.

use std::time::Duration;

use marquee_bridge::MessageFromBackend;
use marquee_bridge::notification::NotificationCategory;

const SUBSCRIBED_MESSAGE: &str =
    "Subscribed! You will receive weekly emails for upcoming movies.";

/// Handles a subscription request (see
/// [`marquee_bridge::MessageToBackend::SubscribeRequest`]).
pub async fn handle_subscribe(context: super::AppContextHandle, email: String) {
    let (api, use_mock) = {
        let state = context.state.read().await;
        (state.api.clone(), state.config.use_mock_catalog)
    };

    let outcome = if use_mock {
        tokio::time::sleep(Duration::from_secs(1)).await;
        log::info!("Subscription email (mock): {email}");
        Ok(())
    } else {
        api.subscribe(&email).await
    };

    match outcome {
        Ok(()) => {
            context
                .send_notification(NotificationCategory::Success, SUBSCRIBED_MESSAGE)
                .await;
            context
                .send(MessageFromBackend::SubscribeResponse {
                    success: true,
                    message: SUBSCRIBED_MESSAGE.to_string(),
                })
                .await;
        }
        Err(e) => {
            let message = format!("Failed to subscribe: {}", e.user_message("Unknown error"));
            context
                .send_notification(NotificationCategory::Error, message.clone())
                .await;
            context
                .send(MessageFromBackend::SubscribeResponse {
                    success: false,
                    message,
                })
                .await;
        }
    }
}
