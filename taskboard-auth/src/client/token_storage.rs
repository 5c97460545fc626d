use crate::error::AuthError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use taskboard_api::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use taskboard_api::{Credentials, StoreError, TokenPair, TokenStore};

type Entries = BTreeMap<String, String>;

/// Credential store backed by a JSON file readable only by its owner.
///
/// The file holds a flat key-value object, so other keys written next to
/// the tokens survive a logout.
pub struct FileTokenStore {
    token_path: PathBuf,
}

impl FileTokenStore {
    /// Store under the user cache directory
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = Self::get_cache_dir()?;
        Self::at(cache_dir.join("credentials.json"))
    }

    pub fn at(token_path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let token_path = token_path.into();

        // Create parent directory if it doesn't exist
        if let Some(dir) = token_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to create credentials directory: {}", e))
                })?;
            }
        }

        Ok(Self { token_path })
    }

    fn get_cache_dir() -> Result<PathBuf, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::Configuration("Could not find cache directory".to_string()))?
            .join("taskboard");
        Ok(cache_dir)
    }

    pub fn path(&self) -> &Path {
        &self.token_path
    }

    fn read_entries(&self) -> Result<Entries, AuthError> {
        if !self.token_path.exists() {
            return Ok(Entries::new());
        }

        let json = fs::read_to_string(&self.token_path)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to read credentials: {}", e)))?;

        Ok(serde_json::from_str(&json)?)
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), AuthError> {
        if entries.is_empty() {
            if self.token_path.exists() {
                fs::remove_file(&self.token_path).map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to delete credentials: {}", e))
                })?;
            }
            return Ok(());
        }

        let json = serde_json::to_string_pretty(entries)?;

        fs::write(&self.token_path, json)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to save credentials: {}", e)))?;

        // Set permissions to 0600 (read/write for owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.token_path)
                .map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.token_path, perms).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Credentials {
        match self.read_entries() {
            Ok(mut entries) => Credentials {
                access_token: entries.remove(ACCESS_TOKEN_KEY),
                refresh_token: entries.remove(REFRESH_TOKEN_KEY),
            },
            Err(e) => {
                tracing::warn!(path = %self.token_path.display(), "Ignoring unreadable credentials: {}", e);
                Credentials::default()
            }
        }
    }

    fn set(&self, pair: &TokenPair) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking sign-in
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(ACCESS_TOKEN_KEY.to_string(), pair.access_token.clone());
        entries.insert(REFRESH_TOKEN_KEY.to_string(), pair.refresh_token.clone());
        Ok(self.write_entries(&entries)?)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.remove(ACCESS_TOKEN_KEY);
        entries.remove(REFRESH_TOKEN_KEY);
        Ok(self.write_entries(&entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::at(dir.path().join("nested").join("credentials.json")).unwrap()
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(&TokenPair::new("a", "b")).unwrap();

        assert_eq!(store.get(), Credentials::from(TokenPair::new("a", "b")));
        // A second handle on the same file sees the same pair
        let other = FileTokenStore::at(store.path()).unwrap();
        assert_eq!(other.get(), Credentials::from(TokenPair::new("a", "b")));
    }

    #[test]
    fn test_file_uses_fixed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set(&TokenPair::new("a", "b")).unwrap();

        let raw: Entries =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw.get("pm_jwt").map(String::as_str), Some("a"));
        assert_eq!(raw.get("pm_refresh").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_clear_is_idempotent_and_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.clear().unwrap();
        store.set(&TokenPair::new("a", "b")).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();

        assert_eq!(store.get(), Credentials::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"theme":"dark","pm_jwt":"a","pm_refresh":"b"}"#).unwrap();

        store.clear().unwrap();

        let raw: Entries =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.get(), Credentials::default());

        store.set(&TokenPair::new("a", "b")).unwrap();
        assert_eq!(store.get().access_token.as_deref(), Some("a"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set(&TokenPair::new("a", "b")).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
