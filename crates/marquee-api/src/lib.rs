//! Request pipeline for the remote movie API.
//!
//! This crate owns the single shared HTTP client used for every outbound
//! call. The client is assembled from two middleware stages:
//!
//! - [`middleware::BearerAuth`] attaches the stored session token as a
//!   bearer `Authorization` header on every request, and is a no-op while
//!   signed out.
//! - [`middleware::RetryOnce`] absorbs one transient failure (network error
//!   or 5xx status) per read request by resending the identical request
//!   after a fixed delay, exactly once. Everything else is classified,
//!   logged, and propagated unchanged.
//!
//! On top of that sit typed endpoint wrappers ([`client::ApiClient`]) for
//! the authentication, watchlist, catalog, and subscription contracts.

pub mod client;
pub mod error;
pub mod middleware;
pub mod session;

pub use crate::client::ApiClient;
pub use crate::error::ApiError;
pub use crate::session::SessionStore;
