use serde::{Deserialize, Serialize};

/// An authenticated session issued by the login/registration endpoints.
///
/// The token is an opaque bearer credential; it is attached to every
/// outgoing request by the request pipeline while the session is stored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Session {
    /// Opaque bearer token proving the authenticated session.
    pub token: String,
    /// The username the token was issued for.
    pub username: String,
}
