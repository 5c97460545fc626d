use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Error code the backend attaches to 401 responses caused by an expired access token.
pub const TOKEN_EXPIRED_CODE: &str = "TOKEN_EXPIRED";

const UNKNOWN_ERROR: &str = "unknown error";

/// A non-2xx response from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "({}) {}: {}", self.status, code, self.message),
            None => write!(f, "({}) {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failures of the refresh procedure. Both end the session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("No refresh token available")]
    NoRefreshToken,

    #[error("Session expired")]
    SessionExpired,
}

impl AuthFailure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoRefreshToken => "NO_REFRESH_TOKEN",
            Self::SessionExpired => "SESSION_EXPIRED",
        }
    }
}

/// Failure to read or write the credential store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Everything a call through [`crate::Client`] can fail with.
///
/// Cloneable so that every caller waiting on a coalesced refresh can
/// receive the same outcome.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("API error {0}")]
    Api(#[from] ApiError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthFailure),

    #[error("HTTP error: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("JSON error: {0}")]
    Json(#[source] Arc<serde_json::Error>),

    #[error("Credential storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ClientError {
    /// HTTP status associated with the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Auth(_) => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Json(_) | Self::Storage(_) => None,
        }
    }

    /// True when the caller has to sign in again.
    pub fn is_session_lost(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(Arc::new(err))
    }
}

/// Schema of backend error bodies.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub code: Option<String>,
}

/// An error body, validated against [`ErrorBody`] at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    Structured(ErrorBody),
    /// Anything that does not fit the schema. The text is kept verbatim so
    /// plain-text error pages can still be shown to the user.
    Unknown(String),
}

impl ErrorPayload {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) => Self::Structured(body),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    /// Whether a 401 carrying this payload means "access token expired".
    pub fn signals_expiry(&self) -> bool {
        match self {
            Self::Structured(body) => {
                body.code.as_deref() == Some(TOKEN_EXPIRED_CODE)
                    || body
                        .message
                        .as_deref()
                        .is_some_and(|message| message.contains("expired"))
            }
            Self::Unknown(_) => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Structured(body) => body.message.as_deref().or(body.error.as_deref()),
            Self::Unknown(raw) if !raw.trim().is_empty() => Some(raw),
            Self::Unknown(_) => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Structured(body) => body.code.as_deref(),
            Self::Unknown(_) => None,
        }
    }

    pub fn into_api_error(self, status: StatusCode) -> ApiError {
        let message = self
            .message()
            .or(status.canonical_reason())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();
        let code = self.code().map(str::to_string);
        ApiError::new(status.as_u16(), message, code)
    }
}
