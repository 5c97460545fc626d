use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use std::sync::Arc;
use taskboard_api::{Client, MemoryTokenStore, TokenPair, TokenStore};
use taskboard_auth::{
    connect_with_store, MemoryNavigator, Navigator, SessionGuard, SessionState, Settings,
};

use crate::commands::Cli;
use crate::App;

/// Client, in-memory credentials, recording navigator and session guard
/// wired against a backend such as a mock server.
pub struct TestSession {
    session: Arc<SessionGuard>,
    store: Arc<MemoryTokenStore>,
    navigator: Arc<MemoryNavigator>,
}

impl TestSession {
    /// Session without stored credentials
    pub fn new(base_url: &str, route: &str) -> Result<Self> {
        Self::with_store(base_url, route, MemoryTokenStore::new())
    }

    /// Session starting from a stored token pair
    pub fn signed_in(base_url: &str, route: &str, access: &str, refresh: &str) -> Result<Self> {
        Self::with_store(
            base_url,
            route,
            MemoryTokenStore::with_tokens(&TokenPair::new(access, refresh)),
        )
    }

    fn with_store(base_url: &str, route: &str, store: MemoryTokenStore) -> Result<Self> {
        let settings = Settings {
            api_url: base_url.to_string(),
            ..Settings::default()
        };
        let store = Arc::new(store);
        let navigator = Arc::new(MemoryNavigator::new(route));

        let client = connect_with_store(&settings, store.clone())?;
        let session = Arc::new(SessionGuard::new(
            client,
            settings.routes.clone(),
            navigator.clone(),
        ));

        Ok(Self {
            session,
            store,
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<SessionGuard> {
        &self.session
    }

    pub fn client(&self) -> &Client {
        self.session.client()
    }

    pub fn store(&self) -> &MemoryTokenStore {
        &self.store
    }

    /// Every route visited so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.navigator.history()
    }

    pub async fn start(&self) -> SessionState {
        self.session.start().await
    }

    /// Parse `args` as a command line and run it the way the binary does
    pub async fn run(&self, args: &[&str]) -> Result<Value> {
        let cli = Cli::try_parse_from(std::iter::once("taskboard").chain(args.iter().copied()))?;

        // Plain navigation: the guard decides once the session is resolved
        self.navigator
            .navigate(&cli.command.route(self.session.policy()));
        App::dispatch(&self.session, cli.command).await
    }

    pub fn assert_route(&self, expected: &str) {
        let current = self.navigator.current_route();
        assert_eq!(
            current,
            expected,
            "Expected route {}. History: {:?}",
            expected,
            self.history()
        );
    }

    pub fn assert_anonymous(&self) {
        let state = self.session.state();
        assert!(
            !state.is_authenticated() && !state.is_loading(),
            "Session should be anonymous but is {:?}",
            state
        );
    }

    pub fn assert_authenticated_as(&self, name: &str) {
        let state = self.session.state();
        assert_eq!(
            state.user().map(|user| user.name.as_str()),
            Some(name),
            "Session should belong to {}",
            name
        );
    }

    pub fn assert_no_credentials(&self) {
        let credentials = self.store.get();
        assert!(
            credentials.access_token.is_none() && credentials.refresh_token.is_none(),
            "Credentials should be cleared but are still stored"
        );
    }
}
