use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::session::RoutePolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Credential file; the user cache directory when unset
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,

    #[serde(default)]
    pub routes: RoutePolicy,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            credentials_path: None,
            routes: RoutePolicy::default(),
        }
    }
}

impl Settings {
    /// Load `config.toml` (or `$TASKBOARD_CONFIG`) overlaid with `TASKBOARD_*` variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("TASKBOARD_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        Self::load(Path::new(&config_path))
    }

    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix("TASKBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        if !self.routes.login.starts_with('/') || !self.routes.landing.starts_with('/') {
            return Err("routes.login and routes.landing must be absolute paths".to_string());
        }
        Ok(())
    }

    /// `api_url` without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.routes.login, "/login");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_values_and_partial_route_table() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
api_url = "https://pm.example.com/"
request_timeout_secs = 3

[routes]
landing = "/home"
"#
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();

        assert_eq!(settings.base_url(), "https://pm.example.com");
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
        assert_eq!(settings.routes.landing, "/home");
        assert_eq!(settings.routes.login, "/login");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = Settings {
            api_url: "localhost:8080".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
