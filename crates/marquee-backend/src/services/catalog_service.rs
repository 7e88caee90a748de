//! Catalog section retrieval.
//!
//! The built-in data is the authoritative catalog while `use_mock_catalog`
//! is on (the default). The live path expects a plain array of movie
//! records and falls back to the built-in data on any failure, announcing
//! the degradation with a warning notification.

use marquee_bridge::MessageFromBackend;
use marquee_bridge::movie::CatalogSection;
use marquee_bridge::notification::NotificationCategory;

/// Handles a catalog section request (see
/// [`marquee_bridge::MessageToBackend::CatalogRequest`]).
pub async fn handle_catalog_request(
    context: super::AppContextHandle,
    section: CatalogSection,
    page: u32,
) {
    let (api, use_mock) = {
        let state = context.state.read().await;
        (state.api.clone(), state.config.use_mock_catalog)
    };

    let movies = if use_mock {
        crate::mock::catalog(section)
    } else {
        match api.catalog(section, page).await {
            Ok(movies) => movies,
            Err(e) => {
                log::error!("Fetching {} failed: {e}", section.path_segment());
                context
                    .send_notification(
                        NotificationCategory::Warning,
                        "Using mock data due to API error",
                    )
                    .await;
                crate::mock::catalog(section)
            }
        }
    };

    context
        .send(MessageFromBackend::CatalogResponse { section, movies })
        .await;
}
