//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, routes bridge messages to services,
//! and manages shared state used by asynchronous tasks.

mod app;
mod config;
mod mock;
mod runtime;
mod services;
mod state;

pub(crate) use crate::app::AppContext;

pub use crate::runtime::run;
