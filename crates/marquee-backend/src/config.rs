use std::path::PathBuf;

use directories::ProjectDirs;
use marquee_bridge::config::Config;
use marquee_bridge::session::Session;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string, remove_file},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading or persisting application
/// configuration and the stored session.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing a file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize to TOML (e.g., when saving changes).
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn build_config_dir() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "marquee", "marquee") {
        Some(path) => Ok(path.config_dir().to_path_buf()),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk, writing a default
/// `config.toml` on first run.
pub async fn load_config() -> Result<Config, ConfigError> {
    let config_dir = build_config_dir()?;

    let config_path = config_dir.join("config.toml");
    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

/// Loads the stored session from `session.toml`, if one exists. The session
/// file is the persisted counterpart of the in-memory session store.
pub async fn load_session() -> Result<Option<Session>, ConfigError> {
    let session_path = build_config_dir()?.join("session.toml");
    if !session_path.exists() {
        return Ok(None);
    }

    let contents = read_to_string(session_path).await?;
    let session: Session = toml::from_str(&contents)?;
    Ok(Some(session))
}

/// Saves the session to disk so it is remembered across runs.
pub async fn save_session(session: &Session) -> Result<(), ConfigError> {
    let config_dir = build_config_dir()?;

    let session_path = config_dir.join("session.toml");
    if let Some(parent) = session_path.parent() {
        create_dir_all(parent).await?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(session_path)
        .await?;

    let contents = toml::to_string_pretty(session)?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(())
}

/// Deletes the stored session file, if present.
pub async fn clear_session() -> Result<(), ConfigError> {
    let session_path = build_config_dir()?.join("session.toml");
    if session_path.exists() {
        remove_file(session_path).await?;
    }
    Ok(())
}
