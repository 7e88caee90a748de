use serde_json::Value;

/// Errors surfaced by the request pipeline.
///
/// The pipeline never downgrades a failure into a silent success: after
/// classification logging (and the single retry, where eligible) the error
/// is always handed back to the caller, who translates it into
/// user-visible text via [`ApiError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL is not a valid absolute URL, or a path could
    /// not be joined onto it.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    /// The underlying HTTP client failed before or after the transfer
    /// (construction, body reading, deserialization).
    #[error(transparent)]
    Client(#[from] reqwest::Error),
    /// No usable response was received (network-level failure, middleware
    /// failure, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest_middleware::Error),
    /// The server answered with a non-success status code.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// A server-supplied `message` field, if the error body carried one.
        message: Option<String>,
        /// A server-supplied `errors` list, if the error body carried one.
        errors: Vec<String>,
        /// The raw error body, kept for plain-text payloads.
        body: Option<String>,
    },
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a status code and the raw error
    /// body, extracting the structured `message`/`errors` fields when the
    /// body is a JSON object.
    pub fn from_status(status: u16, body: String) -> Self {
        let mut message = None;
        let mut errors = Vec::new();
        let mut raw = None;

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => {
                message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if let Some(Value::Array(list)) = map.get("errors") {
                    errors = list
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect();
                }
            }
            // The server sometimes answers with a bare string payload.
            Ok(Value::String(text)) => raw = Some(text),
            _ => {
                let trimmed = body.trim();
                if !trimmed.is_empty() {
                    raw = Some(trimmed.to_string());
                }
            }
        }

        ApiError::Status {
            status,
            message,
            errors,
            body: raw,
        }
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Picks the text to show the user: the server's `message` field first,
    /// then the server's `errors` list joined into one line, then the raw
    /// body, then the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        if let ApiError::Status {
            message,
            errors,
            body,
            ..
        } = self
        {
            if let Some(message) = message {
                return message.clone();
            }
            if !errors.is_empty() {
                return errors.join(", ");
            }
            if let Some(body) = body {
                return body.clone();
            }
        }
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message_field() {
        let err = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#.to_string());
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn joins_server_error_list() {
        let body = r#"{"errors":["username is taken","email is invalid"]}"#;
        let err = ApiError::from_status(400, body.to_string());
        assert_eq!(
            err.user_message("Registration failed"),
            "username is taken, email is invalid"
        );
    }

    #[test]
    fn falls_back_to_raw_body_then_caller_text() {
        let err = ApiError::from_status(500, "upstream exploded".to_string());
        assert_eq!(err.user_message("Request failed"), "upstream exploded");

        let err = ApiError::from_status(503, String::new());
        assert_eq!(err.user_message("Request failed"), "Request failed");
    }

    #[test]
    fn json_string_payload_is_used_verbatim() {
        let err = ApiError::from_status(400, r#""plain server text""#.to_string());
        assert_eq!(err.user_message("fallback"), "plain server text");
    }
}
