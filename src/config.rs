/// User settings, read once at startup
///
/// The settings file lives in the user's config directory:
/// - Linux: ~/.config/photo-portfolio/settings.json
/// - macOS: ~/Library/Application Support/photo-portfolio/settings.json
/// - Windows: %APPDATA%\photo-portfolio\settings.json
///
/// Every key is optional; missing keys take their default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory that photo `src` paths are resolved against
    pub asset_root: PathBuf,
    /// Optional JSON catalog replacing the built-in photos
    pub catalog_path: Option<PathBuf>,
    /// How long the simulated contact form send takes
    pub submit_delay_ms: u64,
    /// How long the thank-you panel stays before the form resets
    pub success_display_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    /// Default tracing directive, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            catalog_path: None,
            submit_delay_ms: 1500,
            success_display_ms: 3000,
            window_width: 1280.0,
            window_height: 860.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the path where the settings file should be stored
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-portfolio");
        path.push("settings.json");
        Some(path)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "submit_delay_ms": 10, "catalog_path": "photos.json" }}"#).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.submit_delay(), Duration::from_millis(10));
        assert_eq!(settings.catalog_path, Some(PathBuf::from("photos.json")));
        assert_eq!(settings.success_display_ms, 3000);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "submit_delay_ms = 10").unwrap();

        assert!(matches!(
            Settings::load_from(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }
}
