//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// Every field is required in the configuration file; a missing or
/// mistyped field fails at load time rather than at first use.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Client name reported to both platforms.
    pub client_name: String,

    /// Client version reported to both platforms.
    pub client_version: String,

    /// Root directory downloads are placed under.
    pub dl_base: PathBuf,

    /// Characters replaced with `_` in every path segment, applied in
    /// list order.
    pub invalid_chars: Vec<char>,

    /// e621/e926 settings.
    pub e6: E6Config,

    /// FurAffinity session settings.
    pub fa: FaConfig,
}

/// e621/e926 account configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct E6Config {
    /// Username identified in the e621 API User-Agent.
    pub username: String,

    /// Tags that cause a post to be skipped, or removed if already on disk.
    pub blacklist: Vec<String>,
}

/// FurAffinity session configuration.
///
/// Both values come from a logged-in browser session.
#[derive(Debug, Clone, Deserialize)]
pub struct FaConfig {
    /// Value of the FurAffinity `a` cookie.
    pub cookie_a: String,

    /// Value of the FurAffinity `b` cookie.
    pub cookie_b: String,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.json",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// User-Agent string attached to raw file-fetch requests.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.client_name, self.client_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_CONFIG: &str = r#"{
        "client_name": "yiffdl",
        "client_version": "0.1.0",
        "dl_base": "/downloads",
        "invalid_chars": ["/", ":", "?"],
        "e6": {
            "username": "someone",
            "blacklist": ["gore", "scat"]
        },
        "fa": {
            "cookie_a": "aaaa",
            "cookie_b": "bbbb"
        }
    }"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = serde_json::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.client_name, "yiffdl");
        assert_eq!(config.dl_base, PathBuf::from("/downloads"));
        assert_eq!(config.invalid_chars, vec!['/', ':', '?']);
        assert_eq!(config.e6.username, "someone");
        assert_eq!(config.e6.blacklist, vec!["gore", "scat"]);
        assert_eq!(config.fa.cookie_a, "aaaa");
        assert_eq!(config.user_agent(), "yiffdl/0.1.0");
    }

    #[test]
    fn test_missing_field_fails_at_load() {
        // No "fa" section
        let json = r#"{
            "client_name": "yiffdl",
            "client_version": "0.1.0",
            "dl_base": "/downloads",
            "invalid_chars": [],
            "e6": {"username": "someone", "blacklist": []}
        }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_multi_char_invalid_char_rejected() {
        let json = FULL_CONFIG.replace(r#"["/", ":", "?"]"#, r#"["ab"]"#);
        assert!(serde_json::from_str::<Config>(&json).is_err());
    }

    #[test]
    fn test_load_missing_file_message() {
        let err = Config::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_malformed_content_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        file.flush().unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client_version, "0.1.0");
    }
}
