//! Configuration management for Gatehouse.
//!
//! Loads configuration from ${GATEHOUSE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for Gatehouse configuration and data directories.
    //!
    //! GATEHOUSE_HOME resolution order:
    //! 1. GATEHOUSE_HOME environment variable (if set)
    //! 2. ~/.config/gatehouse (default)

    use std::path::PathBuf;

    /// Returns the Gatehouse home directory.
    ///
    /// Checks GATEHOUSE_HOME env var first, falls back to ~/.config/gatehouse
    pub fn gatehouse_home() -> PathBuf {
        if let Ok(home) = std::env::var("GATEHOUSE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("gatehouse"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        gatehouse_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        gatehouse_home().join("logs")
    }
}

/// Client configuration for the identity backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the identity backend (GoTrue-compatible).
    pub project_url: String,
    /// Publishable anon key sent as the `apikey` header on every request.
    pub anon_key: String,
    /// Origin used to build email redirect targets.
    pub site_url: String,
    /// Shows the "Continue with Google" entry on the screen.
    pub google_oauth: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
            site_url: "http://localhost:3000".to_string(),
            google_oauth: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Redirect target for confirmation-email and OAuth callbacks.
    pub fn callback_redirect(&self) -> String {
        format!("{}/auth/callback", self.site_url.trim_end_matches('/'))
    }

    /// Redirect target for password-reset links.
    pub fn reset_redirect(&self) -> String {
        format!("{}/auth/reset-password", self.site_url.trim_end_matches('/'))
    }
}

/// Returns the default config file template.
pub fn default_config_template() -> &'static str {
    r#"# Gatehouse configuration

# Base URL of your identity backend (GoTrue-compatible)
project_url = "http://localhost:54321"

# Publishable anon key sent with every auth request
anon_key = ""

# Origin used to build email redirect links
site_url = "http://localhost:3000"

# Show the "Continue with Google" entry
# google_oauth = false
"#
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.project_url, "http://localhost:54321");
        assert!(config.anon_key.is_empty());
        assert!(!config.google_oauth);
    }

    #[test]
    fn test_load_parses_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
project_url = "https://abc.supabase.co"
anon_key = "anon-123"
site_url = "https://app.example.com"
google_oauth = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.project_url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon-123");
        assert!(config.google_oauth);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "project_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_redirects_strip_trailing_slash() {
        let config = Config {
            site_url: "https://app.example.com/".to_string(),
            ..Config::default()
        };

        assert_eq!(
            config.callback_redirect(),
            "https://app.example.com/auth/callback"
        );
        assert_eq!(
            config.reset_redirect(),
            "https://app.example.com/auth/reset-password"
        );
    }

    #[test]
    fn test_template_parses_as_config() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.site_url, "http://localhost:3000");
    }
}
