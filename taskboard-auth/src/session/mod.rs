mod navigator;
mod routes;
mod state;

pub use navigator::{MemoryNavigator, Navigator};
pub use routes::RoutePolicy;
pub use state::{reduce, SessionPhase, SessionState, SessionTransition};

use crate::error::AuthError;
use std::sync::{Arc, Mutex, Weak};
use taskboard_api::endpoints::auth::{
    AuthResponse, ForgotPassword, GetProfile, Login, Logout, Register, ResetPassword, User,
    VerifyEmail,
};
use taskboard_api::{Client, SessionEvent};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Process-wide session state and route guard.
///
/// Owns who is signed in, keeps the navigator on routes the session may
/// see, and signs the user out when the client reports that the session
/// can no longer be refreshed. Shared as `Arc<SessionGuard>`.
pub struct SessionGuard {
    client: Client,
    policy: RoutePolicy,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<SessionState>,
    // Taken by the listener on first `listen`
    events: Mutex<Option<broadcast::Receiver<SessionEvent>>>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl SessionGuard {
    pub fn new(client: Client, policy: RoutePolicy, navigator: Arc<dyn Navigator>) -> Self {
        // Subscribe now so events sent before `start` are not lost
        let events = client.subscribe();
        let (state, _) = watch::channel(SessionState::initializing());

        Self {
            client,
            policy,
            navigator,
            state,
            events: Mutex::new(Some(events)),
            listener: Mutex::new(None),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    pub fn current_route(&self) -> String {
        self.navigator.current_route()
    }

    /// Snapshot of the current session
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Observe every session change from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Start listening for session events, then resolve the initial session.
    pub async fn start(self: &Arc<Self>) -> SessionState {
        self.listen();
        self.refresh_user().await;
        self.state()
    }

    /// Spawn the event listener. Only the first call has any effect.
    pub fn listen(self: &Arc<Self>) {
        let Some(mut events) = lock(&self.events).take() else {
            return;
        };
        let guard: Weak<Self> = Arc::downgrade(self);

        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => match guard.upgrade() {
                        Some(guard) => guard.handle_event(&event),
                        None => break,
                    },
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Session listener lagged behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("Session listener stopped");
        });

        *lock(&self.listener) = Some(handle);
    }

    fn handle_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::TokenRefreshed(_) => {
                tracing::debug!("Access token refreshed");
            }
            SessionEvent::TokenExpired => {
                tracing::info!("Session expired, signing out");
                self.discard_credentials();

                let route = self.navigator.current_route();
                if !self.policy.is_public(&route) {
                    self.navigator.navigate(&self.policy.login);
                }
                self.apply(SessionTransition::SignedOut);
            }
        }
    }

    /// Re-fetch the profile with the stored token.
    ///
    /// Clears the session when there is no token or the backend refuses it.
    pub async fn refresh_user(&self) {
        let transition = if self.client.credentials().access_token.is_none() {
            SessionTransition::SignedOut
        } else {
            match self.client.send(GetProfile).await {
                Ok(user) => SessionTransition::SignedIn(user),
                Err(e) => {
                    tracing::warn!("Could not load profile: {}", e);
                    self.discard_credentials();
                    SessionTransition::SignedOut
                }
            }
        };

        self.apply(transition);
        self.enforce_route_policy();
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let response = self.client.send(Login::new(email, password)).await?;
        self.sign_in(response)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .send(Register::new(name, email, password))
            .await?;
        self.sign_in(response)
    }

    /// Sign out locally whatever the backend answers.
    pub async fn logout(&self) {
        if let Err(e) = self.client.send(Logout).await {
            tracing::warn!("Logout request failed: {}", e);
        }

        self.discard_credentials();
        self.apply(SessionTransition::SignedOut);
        self.navigator.navigate(&self.policy.login);
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.client.send(ForgotPassword::new(email)).await?;
        Ok(())
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AuthError> {
        self.client.send(ResetPassword::new(token, password)).await?;
        Ok(())
    }

    pub async fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        self.client.send(VerifyEmail::new(token)).await?;
        Ok(())
    }

    /// Move to `route`, then apply the route policy.
    ///
    /// Returns the redirect target if the session may not stay there.
    pub fn visit(&self, route: &str) -> Option<String> {
        self.navigator.navigate(route);
        self.enforce_route_policy()
    }

    /// Redirect away from the current route if the session may not see it.
    pub fn enforce_route_policy(&self) -> Option<String> {
        let route = self.navigator.current_route();
        let target = self
            .policy
            .redirect_for(&route, &self.state.borrow())?
            .to_string();

        tracing::info!(
            from = %self.policy.redact(&route),
            to = %self.policy.redact(&target),
            "Redirecting"
        );
        self.navigator.navigate(&target);
        Some(target)
    }

    fn sign_in(&self, response: AuthResponse) -> Result<User, AuthError> {
        let (tokens, user) = response.into_parts();
        self.client.set_credentials(&tokens)?;

        self.apply(SessionTransition::SignedIn(user.clone()));
        self.navigator.navigate(&self.policy.landing);
        self.enforce_route_policy();
        Ok(user)
    }

    fn discard_credentials(&self) {
        if let Err(e) = self.client.clear_credentials() {
            tracing::warn!("Failed to clear credentials: {}", e);
        }
    }

    fn apply(&self, transition: SessionTransition) {
        self.state.send_modify(|state| reduce(state, transition));
        tracing::info!(phase = ?self.state.borrow().phase(), "Session updated");
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.listener).take() {
            handle.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
