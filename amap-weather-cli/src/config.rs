use amap_weather_core::TransportOptions;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timeout_secs = 5
/// ```
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Total request timeout; unset means no timeout.
    pub timeout_secs: Option<u64>,

    pub connect_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "amap-weather", "amap-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// The configured API key, or an error with a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `amap-weather configure` or pass `--key <KEY>`."
                )
            })
    }

    pub fn transport_options(&self) -> TransportOptions {
        let mut options = TransportOptions::new();
        if let Some(secs) = self.timeout_secs {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.connect_timeout_secs {
            options = options.with_connect_timeout(Duration::from_secs(secs));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("amap-weather configure"));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let cfg = Config { api_key: Some(String::new()), ..Default::default() };
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            timeout_secs: Some(5),
            connect_timeout_secs: None,
        };

        let parsed = Config::from_toml(&cfg.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.api_key().unwrap(), "KEY");
    }

    #[test]
    fn missing_fields_default_to_none() {
        let cfg = Config::from_toml(r#"api_key = "KEY""#).unwrap();
        assert_eq!(cfg.timeout_secs, None);
        assert!(cfg.transport_options().is_empty());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = Config { api_key: Some("secret-key".to_string()), ..Default::default() };
        let debug = format!("{cfg:?}");

        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn transport_options_from_timeouts() {
        let cfg = Config {
            api_key: None,
            timeout_secs: Some(5),
            connect_timeout_secs: Some(2),
        };

        let options = cfg.transport_options();
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(2)));
    }
}
