//! View state for the terminal interface.
//!
//! One `ViewState` mirrors the current route, session, and the data shown
//! on each view. Backend events are folded in with [`ViewState::apply`];
//! the run loop owns rendering and side effects.

use std::collections::HashMap;

use marquee_bridge::MessageFromBackend;
use marquee_bridge::movie::{CatalogSection, Movie, WatchlistEntry};
use marquee_bridge::session::Session;

use crate::formatting::{format_added_date, format_rating};

/// The views the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Watchlist,
}

/// What the run loop should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    None,
    /// The watchlist changed remotely; re-fetch it.
    RefreshWatchlist,
}

#[derive(Default)]
pub struct ViewState {
    pub route: Route,
    pub session: Option<Session>,
    pub catalog: HashMap<CatalogSection, Vec<Movie>>,
    pub watchlist: Vec<WatchlistEntry>,
    /// Inline error text shown on the current view, if any.
    pub inline_error: Option<String>,
    /// Outcome of the last subscription attempt.
    pub subscribe_status: Option<(bool, String)>,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session token is currently stored.
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Folds one backend event into the view state.
    pub fn apply(&mut self, message: &MessageFromBackend) -> Reaction {
        match message {
            MessageFromBackend::SessionUpdate(session) => {
                self.session = session.clone();
                if self.session.is_some() {
                    // successful login/registration lands on the home view
                    self.route = Route::Home;
                    self.inline_error = None;
                }
            }
            MessageFromBackend::AuthFormError { message, .. } => {
                self.inline_error = Some(message.clone());
            }
            MessageFromBackend::AuthRequired => {
                self.route = Route::Login;
                self.inline_error = Some("Please log in to view your watchlist".to_string());
            }
            MessageFromBackend::CatalogResponse { section, movies } => {
                self.catalog.insert(*section, movies.clone());
            }
            MessageFromBackend::WatchlistResponse(entries) => {
                self.watchlist = entries.clone();
                self.inline_error = None;
            }
            MessageFromBackend::WatchlistUpdated => {
                // jump to the watchlist so the user sees the new entry
                self.route = Route::Watchlist;
                return Reaction::RefreshWatchlist;
            }
            MessageFromBackend::WatchlistRemoved(movie_id) => {
                self.watchlist.retain(|e| e.movie_id != *movie_id);
            }
            MessageFromBackend::WatchlistFailed(message) => {
                self.inline_error = Some(message.clone());
            }
            MessageFromBackend::SubscribeResponse { success, message } => {
                self.subscribe_status = Some((*success, message.clone()));
            }
            MessageFromBackend::NotificationMessage(_)
            | MessageFromBackend::ConfigurationResponse(_) => {}
        }
        Reaction::None
    }
}

/// Prints one catalog section as a movie list.
pub fn print_section(state: &ViewState, section: CatalogSection) {
    println!("\n== {} ==", section.title());
    match state.catalog.get(&section) {
        Some(movies) if !movies.is_empty() => {
            for movie in movies {
                println!(
                    "  [{}] {} ({}) {}",
                    movie.id,
                    movie.title,
                    movie.release_date.as_deref().unwrap_or("-"),
                    format_rating(movie.vote_average),
                );
            }
        }
        _ => println!("  No movies found"),
    }
}

/// Prints the home view: every catalog section plus subscription status.
pub fn print_home(state: &ViewState) {
    for section in CatalogSection::all() {
        print_section(state, section);
    }
    if let Some((_, status)) = &state.subscribe_status {
        println!("\n{status}");
    }
}

/// Prints the watchlist view.
pub fn print_watchlist(state: &ViewState) {
    if state.watchlist.is_empty() {
        println!("\nNo movies in your watchlist yet");
        return;
    }
    println!("\n== Your Watchlist ({}) ==", state.watchlist.len());
    for entry in &state.watchlist {
        println!(
            "  [{}] {} - added on {}",
            entry.movie_id,
            entry.movie_name,
            format_added_date(&entry.add_at),
        );
    }
}
