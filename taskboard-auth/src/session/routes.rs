use serde::Deserialize;
use std::borrow::Cow;

use super::SessionState;

/// Which routes need a session and where to send users who are on the wrong side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoutePolicy {
    /// Where anonymous users are sent
    pub login: String,
    /// Where signed-in users are sent
    pub landing: String,
    /// Routes reachable without a session, matched exactly
    pub public_routes: Vec<String>,
    /// Routes under these prefixes are public whatever follows
    pub public_prefixes: Vec<String>,
    /// Public routes a signed-in user is moved away from
    pub anonymous_only: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            landing: "/dashboard".to_string(),
            public_routes: ["/login", "/register", "/forgot-password", "/reset-password", "/verify-email", "/"]
                .map(String::from)
                .to_vec(),
            public_prefixes: ["/reset-password/", "/verify-email/"].map(String::from).to_vec(),
            anonymous_only: ["/login", "/register", "/"].map(String::from).to_vec(),
        }
    }
}

impl RoutePolicy {
    pub fn is_public(&self, route: &str) -> bool {
        let path = path_of(route);
        self.public_routes.iter().any(|r| r == path)
            || self.public_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Where `state` should be sent from `route`, if anywhere.
    ///
    /// Nothing is decided while the session is still loading.
    pub fn redirect_for(&self, route: &str, state: &SessionState) -> Option<&str> {
        if state.is_loading() {
            return None;
        }

        let path = path_of(route);
        if !state.is_authenticated() && !self.is_public(path) {
            Some(&self.login)
        } else if state.is_authenticated() && self.anonymous_only.iter().any(|r| r == path) {
            Some(&self.landing)
        } else {
            None
        }
    }

    /// `route` fit for logging: whatever follows a public prefix is masked,
    /// as it carries single-use tokens.
    pub fn redact<'a>(&self, route: &'a str) -> Cow<'a, str> {
        let path = path_of(route);
        match self
            .public_prefixes
            .iter()
            .find(|prefix| path.len() > prefix.len() && path.starts_with(prefix.as_str()))
        {
            Some(prefix) => format!("{}:token", prefix).into(),
            None => path.into(),
        }
    }
}

/// Route without query string or fragment
fn path_of(route: &str) -> &str {
    route.split(['?', '#']).next().unwrap_or(route)
}
