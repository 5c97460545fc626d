use taskboard_api::endpoints::auth::User;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Authenticated,
    Anonymous,
}

/// Who is signed in. `is_authenticated` is derived from `user`, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    is_loading: bool,
}

impl SessionState {
    pub fn initializing() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.is_loading) {
            (Some(_), _) => SessionPhase::Authenticated,
            (None, true) => SessionPhase::Initializing,
            (None, false) => SessionPhase::Anonymous,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initializing()
    }
}

/// Changes the guard applies to its state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionTransition {
    SignedIn(User),
    SignedOut,
}

/// Pure state transition function
pub fn reduce(state: &mut SessionState, transition: SessionTransition) {
    match transition {
        SessionTransition::SignedIn(user) => *state = SessionState::authenticated(user),
        SessionTransition::SignedOut => *state = SessionState::anonymous(),
    }
}
