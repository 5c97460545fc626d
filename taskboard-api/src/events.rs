use crate::token_store::TokenPair;

/// Buffered events per subscriber before older ones are dropped
pub(crate) const EVENT_CAPACITY: usize = 16;

/// Notifications broadcast by [`crate::Client`] to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A refresh succeeded and the new pair has been stored.
    TokenRefreshed(TokenPair),
    /// The backend rejected the refresh token and the store has been cleared.
    TokenExpired,
}
