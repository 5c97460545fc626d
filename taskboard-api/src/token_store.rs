use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "pm_jwt";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "pm_refresh";

/// Access/refresh token pair as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Whatever is currently in the store. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl From<TokenPair> for Credentials {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: Some(pair.access_token),
            refresh_token: Some(pair.refresh_token),
        }
    }
}

/// Persistent credential storage shared by the client and the session guard.
///
/// Both tokens are always written and removed together.
pub trait TokenStore: Send + Sync {
    /// Read the stored credentials. Never fails: an unreadable store reads as empty.
    fn get(&self) -> Credentials;

    fn set(&self, pair: &TokenPair) -> Result<(), StoreError>;

    /// Remove both tokens. Succeeds when nothing is stored.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-local key-value store, for tests and sessions that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<HashMap<&'static str, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(pair: &TokenPair) -> Self {
        let store = Self::new();
        store.write_pair(pair);
        store
    }

    fn write_pair(&self, pair: &TokenPair) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(ACCESS_TOKEN_KEY, pair.access_token.clone());
        entries.insert(REFRESH_TOKEN_KEY, pair.refresh_token.clone());
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Credentials {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Credentials {
            access_token: entries.get(ACCESS_TOKEN_KEY).cloned(),
            refresh_token: entries.get(REFRESH_TOKEN_KEY).cloned(),
        }
    }

    fn set(&self, pair: &TokenPair) -> Result<(), StoreError> {
        self.write_pair(pair);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(ACCESS_TOKEN_KEY);
        entries.remove(REFRESH_TOKEN_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_both_tokens() {
        let store = MemoryTokenStore::new();
        store.set(&TokenPair::new("a", "b")).unwrap();

        assert_eq!(
            store.get(),
            Credentials {
                access_token: Some("a".into()),
                refresh_token: Some("b".into()),
            }
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryTokenStore::with_tokens(&TokenPair::new("a", "b"));
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), Credentials::default());
    }

    #[test]
    fn test_token_pair_wire_format() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"accessToken":"x","refreshToken":"y"}"#).unwrap();
        assert_eq!(pair, TokenPair::new("x", "y"));
    }
}
