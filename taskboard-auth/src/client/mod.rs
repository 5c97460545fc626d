mod config;
mod token_storage;

pub use config::Settings;
pub use token_storage::FileTokenStore;

use std::sync::Arc;
use taskboard_api::{Client, TokenStore};

use crate::error::AuthError;

/// Build the API client described by `settings`, backed by the file credential store
pub fn connect(settings: &Settings) -> Result<Client, AuthError> {
    settings.validate().map_err(AuthError::Configuration)?;

    let store = match &settings.credentials_path {
        Some(path) => FileTokenStore::at(path)?,
        None => FileTokenStore::new()?,
    };
    tracing::debug!(path = %store.path().display(), "Using credential store");

    connect_with_store(settings, Arc::new(store))
}

/// Build the API client described by `settings` on top of any credential store
pub fn connect_with_store(
    settings: &Settings,
    store: Arc<dyn TokenStore>,
) -> Result<Client, AuthError> {
    let http_client = reqwest::Client::builder()
        .timeout(settings.request_timeout())
        .build()?;

    Ok(Client::with_http_client(
        http_client,
        settings.base_url(),
        store,
    ))
}
