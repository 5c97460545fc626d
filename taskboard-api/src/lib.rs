mod client;
pub mod endpoints;
mod error;
pub mod events;
mod macros;
pub mod repositories;
pub mod token_store;

pub use crate::client::{Client, RequestOptions};
pub use crate::error::{
    ApiError, AuthFailure, ClientError, ErrorBody, ErrorPayload, StoreError, TOKEN_EXPIRED_CODE,
};
pub use crate::events::SessionEvent;
pub use crate::token_store::{Credentials, MemoryTokenStore, TokenPair, TokenStore};
use repositories::*;

/// Entry point for building typed requests, e.g. `Request::projects().list()`
pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    pub fn activity() -> ActivityRepository {
        ActivityRepository::new()
    }

    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn notifications() -> NotificationRepository {
        NotificationRepository::new()
    }

    pub fn projects() -> ProjectRepository {
        ProjectRepository::new()
    }

    pub fn tasks(project_id: impl Into<String>) -> TaskRepository {
        TaskRepository::new(project_id)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
