//! Terminal frontend: view state, the notification center, and the
//! line-oriented command loop driving the backend bridge.

use std::time::Duration;

use marquee_bridge::MessageFromBackend;
use marquee_bridge::movie::CatalogSection;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::commands::Command;
use crate::notifications::{NotificationCenter, NotificationHandle};
use crate::views::{Reaction, Route, ViewState};

pub mod commands;
pub mod formatting;
pub mod notifications;
pub mod views;

/// Typed wrapper around the command channel to the backend.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<marquee_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_config(&self) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::ConfigurationRequest)
            .await
            .expect("failed to request config");
    }

    pub async fn request_session(&self) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::SessionRequest)
            .await
            .expect("failed to request session");
    }

    pub async fn login(&self, username: String, password: String) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::LoginRequest { username, password })
            .await
            .expect("failed to request login");
    }

    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    ) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::RegisterRequest {
                username,
                email,
                password,
                confirm_password,
            })
            .await
            .expect("failed to request registration");
    }

    pub async fn logout(&self) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::LogoutRequest)
            .await
            .expect("failed to request logout");
    }

    pub async fn request_catalog(&self, section: CatalogSection, page: u32) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::CatalogRequest { section, page })
            .await
            .expect("failed to request catalog section");
    }

    pub async fn fetch_watchlist(&self) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::WatchlistFetchRequest)
            .await
            .expect("failed to request watchlist");
    }

    pub async fn add_to_watchlist(&self, movie_id: u64) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::WatchlistAddRequest(movie_id))
            .await
            .expect("failed to request watchlist addition");
    }

    pub async fn remove_from_watchlist(&self, movie_id: u64) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::WatchlistRemoveRequest(movie_id))
            .await
            .expect("failed to request watchlist removal");
    }

    pub async fn subscribe(&self, email: String) {
        self.to_backend
            .send(marquee_bridge::MessageToBackend::SubscribeRequest { email })
            .await
            .expect("failed to request subscription");
    }
}

/// Runs the frontend loop on its own runtime until the user quits or the
/// backend channel closes.
pub fn run(
    rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<marquee_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_app(rx, tx))
}

async fn run_app(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<marquee_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let bridge = BackendBridge { to_backend: tx };
    let mut center = NotificationCenter::new(notifications::DEFAULT_DURATION);
    let notices = center.handle();
    let mut state = ViewState::new();

    bridge.request_config().await;
    bridge.request_session().await;
    for section in CatalogSection::all() {
        bridge.request_catalog(section, 1).await;
    }

    println!("marquee - your personal movie discovery terminal");
    println!("{}", commands::USAGE);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            message = rx.recv() => {
                match message {
                    Some(message) => {
                        handle_backend_message(message, &mut state, &mut center, &bridge).await;
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match commands::parse(line) {
                            Ok(Command::Quit) => break,
                            Ok(command) => {
                                handle_command(command, &mut state, &notices, &bridge).await;
                            }
                            Err(message) => println!("{message}"),
                        }
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

async fn handle_backend_message(
    message: MessageFromBackend,
    state: &mut ViewState,
    center: &mut NotificationCenter,
    bridge: &BackendBridge,
) {
    log::debug!("Got a backend message: {message:?}");

    if state.apply(&message) == Reaction::RefreshWatchlist {
        bridge.fetch_watchlist().await;
    }

    match &message {
        MessageFromBackend::NotificationMessage(notification) => {
            let id = center.post(notification.clone());
            println!(
                "[{}] {} (#{id})",
                notification.category.label(),
                notification.message
            );
        }
        MessageFromBackend::ConfigurationResponse(config) => {
            center.set_default_duration(Duration::from_millis(config.notification_duration_ms));
            println!(
                "API base URL: {} (mock catalog: {})",
                config.api.base_url, config.use_mock_catalog
            );
        }
        MessageFromBackend::SessionUpdate(Some(session)) => {
            println!("Signed in as {}", session.username);
        }
        MessageFromBackend::SessionUpdate(None) => println!("Signed out"),
        MessageFromBackend::AuthFormError { message, .. } => println!("{message}"),
        MessageFromBackend::AuthRequired => {
            println!("Please log in to view your watchlist");
        }
        MessageFromBackend::CatalogResponse { section, .. } => {
            if state.route == Route::Home {
                views::print_section(state, *section);
            }
        }
        MessageFromBackend::WatchlistResponse(_) | MessageFromBackend::WatchlistRemoved(_) => {
            if state.route == Route::Watchlist {
                views::print_watchlist(state);
            }
        }
        MessageFromBackend::WatchlistFailed(message) => println!("{message}"),
        MessageFromBackend::SubscribeResponse { message, .. } => println!("{message}"),
        MessageFromBackend::WatchlistUpdated => {}
    }
}

async fn handle_command(
    command: Command,
    state: &mut ViewState,
    notices: &NotificationHandle,
    bridge: &BackendBridge,
) {
    match command {
        Command::Login { username, password } => {
            state.route = Route::Login;
            bridge.login(username, password).await;
        }
        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            state.route = Route::Register;
            bridge.register(username, email, password, confirm_password).await;
        }
        Command::Logout => bridge.logout().await,
        Command::Home => {
            state.route = Route::Home;
            views::print_home(state);
        }
        Command::Watchlist => {
            if state.signed_in() {
                state.route = Route::Watchlist;
                bridge.fetch_watchlist().await;
            } else {
                // route guard: redirect to the login view without touching
                // the server
                state.route = Route::Login;
                println!("Please log in to view your watchlist");
            }
        }
        Command::Add(movie_id) => bridge.add_to_watchlist(movie_id).await,
        Command::Remove(movie_id) => bridge.remove_from_watchlist(movie_id).await,
        Command::Subscribe { email } => {
            println!("Subscribing...");
            bridge.subscribe(email).await;
        }
        Command::Dismiss(id) => {
            if let Err(e) = notices.remove(id) {
                log::error!("Could not dismiss notification {id}: {e}");
            }
        }
        Command::ClearNotices => {
            if let Err(e) = notices.clear() {
                log::error!("Could not clear notifications: {e}");
            }
        }
        Command::Notices => match notices.snapshot() {
            Ok(items) if items.is_empty() => println!("No active notifications"),
            Ok(items) => {
                for n in items {
                    println!("  #{} [{}] {}", n.id, n.category.label(), n.message);
                }
            }
            Err(e) => log::error!("Could not list notifications: {e}"),
        },
        Command::Config => bridge.request_config().await,
        Command::Help => println!("{}", commands::USAGE),
        // quit is handled by the caller before dispatch
        Command::Quit => {}
    }
}
