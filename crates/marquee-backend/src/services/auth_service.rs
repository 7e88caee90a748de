//! Login, registration, and logout flows.
//!
//! Validation failures short-circuit before any network call and surface as
//! inline form errors; server failures are translated via the pipeline's
//! message-extraction order. Successful sign-ins are persisted both in the
//! in-memory session store (read by the auth middleware) and on disk.

use marquee_bridge::session::Session;
use marquee_bridge::{AuthForm, MessageFromBackend};

/// Checks the login form before any network I/O. Returns the trimmed
/// username on success, the inline error text otherwise.
fn validate_login<'a>(username: &'a str, password: &str) -> Result<&'a str, &'static str> {
    let trimmed = username.trim();
    if trimmed.is_empty() || password.is_empty() {
        return Err("Please enter username and password");
    }
    Ok(trimmed)
}

/// Client-side registration checks aligned with the server's validation.
fn validate_registration(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Stores a freshly issued session in memory and on disk, then announces it.
async fn adopt_session(context: &super::AppContextHandle, session: Session) {
    let sessions = {
        let state = context.state.read().await;
        state.sessions.clone()
    };
    sessions.set(session.clone()).await;
    if let Err(e) = crate::config::save_session(&session).await {
        log::error!("Failed to persist session: {e}");
    }
    context
        .send(MessageFromBackend::SessionUpdate(Some(session)))
        .await;
}

/// Handles an incoming session request (see
/// [`marquee_bridge::MessageToBackend::SessionRequest`]).
pub async fn handle_session_request(context: super::AppContextHandle) {
    let session = {
        let state = context.state.read().await;
        state.sessions.clone()
    }
    .get()
    .await;
    context
        .send(MessageFromBackend::SessionUpdate(session))
        .await;
}

/// Handles a login attempt (see
/// [`marquee_bridge::MessageToBackend::LoginRequest`]).
pub async fn handle_login(context: super::AppContextHandle, username: String, password: String) {
    let username = match validate_login(&username, &password) {
        Ok(trimmed) => trimmed.to_string(),
        Err(message) => {
            context
                .send(MessageFromBackend::AuthFormError {
                    form: AuthForm::Login,
                    message: message.to_string(),
                })
                .await;
            return;
        }
    };

    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.login(&username, &password).await {
        Ok(session) => {
            log::info!("Signed in as {}", session.username);
            adopt_session(&context, session).await;
        }
        Err(e) => {
            context
                .send(MessageFromBackend::AuthFormError {
                    form: AuthForm::Login,
                    message: e.user_message("Login failed"),
                })
                .await;
        }
    }
}

/// Handles a registration attempt (see
/// [`marquee_bridge::MessageToBackend::RegisterRequest`]).
pub async fn handle_register(
    context: super::AppContextHandle,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) {
    if let Err(message) = validate_registration(&password, &confirm_password) {
        context
            .send(MessageFromBackend::AuthFormError {
                form: AuthForm::Register,
                message: message.to_string(),
            })
            .await;
        return;
    }

    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api
        .register(&username, &email, &password, &confirm_password)
        .await
    {
        Ok(session) => {
            log::info!("Registered account {}", session.username);
            adopt_session(&context, session).await;
        }
        Err(e) => {
            context
                .send(MessageFromBackend::AuthFormError {
                    form: AuthForm::Register,
                    message: e.user_message("Registration failed"),
                })
                .await;
        }
    }
}

/// Handles a logout request: clears the in-memory store and the session
/// file, then announces the signed-out state.
pub async fn handle_logout(context: super::AppContextHandle) {
    let sessions = {
        let state = context.state.read().await;
        state.sessions.clone()
    };
    sessions.clear().await;
    if let Err(e) = crate::config::clear_session().await {
        log::error!("Failed to remove session file: {e}");
    }
    context.send(MessageFromBackend::SessionUpdate(None)).await;
}

#[cfg(test)]
mod tests {
    use marquee_bridge::config::Config;

    use super::*;
    use crate::services::testing::test_context;

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            validate_login("", "secret"),
            Err("Please enter username and password")
        );
        assert_eq!(
            validate_login("alice", ""),
            Err("Please enter username and password")
        );
        // whitespace-only usernames count as empty
        assert_eq!(
            validate_login("   ", "secret"),
            Err("Please enter username and password")
        );
    }

    #[test]
    fn login_trims_the_username() {
        assert_eq!(validate_login("  alice  ", "secret"), Ok("alice"));
    }

    #[test]
    fn registration_rejects_short_passwords() {
        assert_eq!(
            validate_registration("short", "short"),
            Err("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        assert_eq!(
            validate_registration("longenough", "different1"),
            Err("Passwords do not match")
        );
        assert_eq!(validate_registration("longenough", "longenough"), Ok(()));
    }

    #[tokio::test]
    async fn empty_login_short_circuits_without_network() {
        let (context, mut rx) = test_context(Config::default(), None);
        handle_login(context, String::new(), "secret".to_string()).await;

        match rx.recv().await {
            Some(MessageFromBackend::AuthFormError { form, message }) => {
                assert_eq!(form, AuthForm::Login);
                assert_eq!(message, "Please enter username and password");
            }
            other => panic!("expected an inline form error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn short_password_short_circuits_registration() {
        let (context, mut rx) = test_context(Config::default(), None);
        handle_register(
            context,
            "alice".to_string(),
            "alice@example.com".to_string(),
            "short".to_string(),
            "short".to_string(),
        )
        .await;

        match rx.recv().await {
            Some(MessageFromBackend::AuthFormError { form, message }) => {
                assert_eq!(form, AuthForm::Register);
                assert_eq!(message, "Password must be at least 8 characters long");
            }
            other => panic!("expected an inline form error, got {other:?}"),
        }
    }
}
