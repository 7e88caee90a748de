/// Severity or category for user-visible notifications.
///
/// This enum classifies notifications by their intent and visual styling,
/// allowing the UI to display them appropriately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationCategory {
    /// Neutral informational message that does not indicate success or failure.
    #[default]
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
}

impl NotificationCategory {
    /// Short label used when rendering the notification.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::Info => "info",
            NotificationCategory::Success => "success",
            NotificationCategory::Warning => "warning",
            NotificationCategory::Error => "error",
        }
    }
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// The category of the notification, determining its presentation.
    pub category: NotificationCategory,
    /// The text content to display to the user.
    pub message: String,
}
