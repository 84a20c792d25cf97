//! Load seed configuration (suggestions, debounce delay)

use crate::debounce::{Tick, DEFAULT_DELAY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed suggestions compiled in for hosts that supply no config file
pub const DEFAULT_SUGGESTIONS: &[&str] =
    &["apple", "apricot", "banana", "cherry", "grape", "orange"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: PathBuf,
        source: serde_json::Error,
    },
}

/// Seed configuration for the autocomplete engine
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Initial contents of the suggestion store, in display order
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
    /// Ticks a match string must stay unchanged before it is learned
    #[serde(rename = "debounceDelay", default = "default_delay")]
    pub debounce_delay: Tick,
}

fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

fn default_delay() -> Tick {
    DEFAULT_DELAY
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
            debounce_delay: DEFAULT_DELAY,
        }
    }
}

impl SeedConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            file: path.to_path_buf(),
            source: e,
        })
    }

    /// Replace the seed suggestions
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the debounce delay
    pub fn with_debounce_delay(mut self, delay: Tick) -> Self {
        self.debounce_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.suggestions.len(), DEFAULT_SUGGESTIONS.len());
        assert_eq!(config.debounce_delay, 300);
    }

    #[test]
    fn test_builder() {
        let config = SeedConfig::default()
            .with_suggestions(["alpha", "beta"])
            .with_debounce_delay(100);
        assert_eq!(config.suggestions, vec!["alpha", "beta"]);
        assert_eq!(config.debounce_delay, 100);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seed.json");
        fs::write(
            &path,
            r#"{"suggestions": ["one", "two"], "debounceDelay": 150}"#,
        )
        .unwrap();

        let config = SeedConfig::load(&path).unwrap();
        assert_eq!(config.suggestions, vec!["one", "two"]);
        assert_eq!(config.debounce_delay, 150);
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seed.json");
        fs::write(&path, r#"{"suggestions": ["solo"]}"#).unwrap();

        let config = SeedConfig::load(&path).unwrap();
        assert_eq!(config.suggestions, vec!["solo"]);
        assert_eq!(config.debounce_delay, 300);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = SeedConfig::load(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seed.json");
        fs::write(&path, "not json").unwrap();

        let result = SeedConfig::load(&path);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::NotFound(PathBuf::from("seed.json"));
        assert!(err.to_string().contains("not found"));
    }
}
