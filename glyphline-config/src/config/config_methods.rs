//! Validation and lookup helpers for `ThemeConfig`.

use super::ThemeConfig;
use crate::error::ConfigError;
use crate::types::{FontCategory, FontSource};

impl ThemeConfig {
    /// Check field values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.default_tab_width == 0 {
            return Err(ConfigError::Validation(
                "layout.default_tab_width must be at least 1".to_string(),
            ));
        }
        if !(self.layout.tab_space_fallback.is_finite() && self.layout.tab_space_fallback > 0.0) {
            return Err(ConfigError::Validation(format!(
                "layout.tab_space_fallback must be a positive number, got {}",
                self.layout.tab_space_fallback
            )));
        }
        for category in FontCategory::ALL {
            for source in [self.fonts.get(category), self.defaults.get(category)]
                .into_iter()
                .flatten()
            {
                check_source(category, source)?;
            }
        }
        if let Some(FontSource::Family { family }) = &self.emoji
            && family.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "emoji family name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The primary source for a category.
    pub fn primary_source(&self, category: FontCategory) -> Option<&FontSource> {
        self.fonts.get(category)
    }

    /// The built-in default source for a category.
    pub fn default_source(&self, category: FontCategory) -> Option<&FontSource> {
        self.defaults.get(category)
    }
}

fn check_source(category: FontCategory, source: &FontSource) -> Result<(), ConfigError> {
    match source {
        FontSource::Family { family } if family.trim().is_empty() => Err(ConfigError::Validation(
            format!("{category} font family name must not be empty"),
        )),
        FontSource::Path { path } if path.as_os_str().is_empty() => Err(ConfigError::Validation(
            format!("{category} font path must not be empty"),
        )),
        _ => Ok(()),
    }
}
