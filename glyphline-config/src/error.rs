//! Typed error variants for the glyphline-config crate.
//!
//! Callers that work with `anyhow` get these coerced automatically; callers
//! that care can match on the variant instead of inspecting strings.

use thiserror::Error;

/// Errors that can occur when loading, saving or validating a theme config.
///
/// # Example
///
/// ```rust,no_run
/// use glyphline_config::{ConfigError, ThemeConfig};
///
/// match ThemeConfig::load_from("theme.yaml".as_ref()) {
///     Ok(config) => println!("tab width {}", config.layout.default_tab_width),
///     Err(ConfigError::Io(io)) => eprintln!("I/O error: {io}"),
///     Err(ConfigError::Parse(p)) => eprintln!("YAML parse error: {p}"),
///     Err(ConfigError::Validation(msg)) => eprintln!("Validation: {msg}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading theme config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in theme config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and why it was rejected.
    #[error("Theme config validation error: {0}")]
    Validation(String),
}
