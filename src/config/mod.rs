//! Configuration management for Bubo builds.
//!
//! Configuration is read from `bubo.toml`, or from a bare `feeds.json`
//! group -> urls mapping. Missing sections fall back to defaults.

pub mod scheduler;
pub mod transport;

pub use scheduler::SchedulerConfig;
pub use transport::{TransportConfig, TransportProfile};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Group name -> ordered feed urls
    pub feeds: BTreeMap<String, Vec<String>>,
    pub scheduler: SchedulerConfig,
    pub transport: TransportConfig,
    pub output: OutputConfig,
}

/// Where and how the finished build is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Page heading for HTML output
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/index.html"),
            format: OutputFormat::Html,
            title: "Bubo Reader".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl Config {
    /// Load configuration from `path`, or from the first default location
    /// that exists.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::find_default_path()?,
        };
        let config = Self::from_path(&path)?;
        Ok((config, path))
    }

    /// Read and validate a config file. A `.json` extension selects the bare
    /// feed-list format.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_feed_list_json(&content)
        } else {
            Self::from_toml(&content)
        }
        .map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse a `{"Group": ["url", ...]}` document.
    pub fn from_feed_list_json(content: &str) -> Result<Self, String> {
        let feeds: BTreeMap<String, Vec<String>> =
            serde_json::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self {
            feeds,
            ..Default::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport.profiles.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one transport profile is required".into(),
            ));
        }
        if self.scheduler.max_connections == Some(0) {
            return Err(ConfigError::Invalid(
                "scheduler.max_connections must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Total number of configured (group, url) pairs.
    pub fn feed_count(&self) -> usize {
        self.feeds.values().map(Vec::len).sum()
    }

    /// Candidate config locations, in lookup order.
    pub fn default_paths() -> Result<Vec<PathBuf>, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(vec![
            PathBuf::from("bubo.toml"),
            PathBuf::from("config").join("feeds.json"),
            config_dir.join("bubo").join("bubo.toml"),
        ])
    }

    fn find_default_path() -> Result<PathBuf, ConfigError> {
        let mut candidates = Self::default_paths()?;
        match candidates.iter().position(|p| p.exists()) {
            Some(i) => Ok(candidates.swap_remove(i)),
            None => Err(ConfigError::NotFound(candidates)),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("No config file found (looked in {0:?})")]
    NotFound(Vec<PathBuf>),

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_toml_config() {
        let content = r#"
[feeds]
News = ["https://a.test/rss", "https://b.test/rss"]
Blogs = ["https://c.test/feed"]

[scheduler]
delay_ms = 100
max_connections = 4

[output]
path = "out/feed.json"
format = "json"

[[transport.profiles]]
name = "only"
timeout_secs = 3
"#;
        let config = Config::from_toml(content).expect("config should parse");

        assert_eq!(config.feed_count(), 3);
        assert_eq!(config.feeds["News"], vec!["https://a.test/rss", "https://b.test/rss"]);
        assert_eq!(config.scheduler.delay_ms, 100);
        assert_eq!(config.scheduler.max_connections, Some(4));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.title, "Bubo Reader");
        assert_eq!(config.transport.profiles.len(), 1);
        assert_eq!(config.transport.profiles[0].timeout_secs, 3);
    }

    #[test]
    fn test_example_config_deserializes() {
        let content = include_str!("../../bubo.example.toml");
        let config = Config::from_toml(content).expect("example config should be valid TOML");

        assert_eq!(config.feed_count(), 4);
        assert_eq!(config.scheduler.max_connections, Some(8));
        let names: Vec<_> = config.transport.profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["primary", "browser"]);
        assert!(config.transport.profiles[1].accept_invalid_certs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").expect("empty config should work");

        assert_eq!(config.feed_count(), 0);
        assert_eq!(config.scheduler, SchedulerConfig::default());
        assert_eq!(config.transport.profiles.len(), 2);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_feed_list_json() {
        let config =
            Config::from_feed_list_json(r#"{"News": ["https://a.test/rss", "https://b.test/rss"]}"#)
                .unwrap();
        assert_eq!(config.feed_count(), 2);
        assert_eq!(config.transport, TransportConfig::default());
    }

    #[test]
    fn test_from_path_selects_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("feeds.json");
        let mut file = fs::File::create(&json_path).unwrap();
        file.write_all(br#"{"Tech": ["https://t.test/atom"]}"#).unwrap();

        let config = Config::from_path(&json_path).unwrap();
        assert_eq!(config.feeds["Tech"], vec!["https://t.test/atom"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_path_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bubo.toml");
        fs::write(&path, "feeds = 12").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bubo.toml"));
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let config = Config {
            scheduler: SchedulerConfig {
                delay_ms: 0,
                max_connections: Some(0),
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_profiles() {
        let config = Config {
            transport: TransportConfig { profiles: vec![] },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
