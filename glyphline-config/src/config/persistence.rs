//! Theme config persistence and path resolution.

use super::ThemeConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

impl ThemeConfig {
    /// Load the theme from the default path, or return defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Theme config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("No theme config found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate a theme from a specific YAML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading theme config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a theme from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the theme, defaults included, as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Save the theme to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = self.to_yaml_string()?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Save the theme to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Get the theme file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("theme.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("glyphline")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("glyphline")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
