//! Configuration file support for bactrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bactrack/config.toml`.

use crate::types::Sex;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub data: DataConfig,
}

/// Default physiological profile used when CLI flags are omitted
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default)]
    pub sex: Sex,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            sex: Sex::default(),
        }
    }
}

/// Drink log location configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_drinks_path")]
    pub drinks_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            drinks_path: default_drinks_path(),
        }
    }
}

// Default value functions
fn default_weight_kg() -> f64 {
    60.0
}

fn default_drinks_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("bactrack").join("drinks.jsonl")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.profile.weight_kg <= 0.0 {
            return Err(Error::Config(format!(
                "profile.weight_kg must be positive, got {}",
                config.profile.weight_kg
            )));
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("bactrack").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile.weight_kg, 60.0);
        assert_eq!(config.profile.sex, Sex::Unspecified);
        assert!(config.data.drinks_path.ends_with("drinks.jsonl"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.profile.weight_kg, parsed.profile.weight_kg);
        assert_eq!(config.profile.sex, parsed.profile.sex);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[profile]
sex = "female"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.sex, Sex::Female);
        assert_eq!(config.profile.weight_kg, 60.0); // default
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\nweight_kg = 0.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
