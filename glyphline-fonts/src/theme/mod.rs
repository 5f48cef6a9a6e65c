//! Theme font resources.
//!
//! A [`ThemeFonts`] is an immutable snapshot of the raw font bytes the theme
//! supplies: a primary and a built-in default resource per category, plus an
//! optional emoji resource. The face-set resolver parses faces out of it.

mod loader;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use glyphline_config::{FontCategory, ThemeConfig};

pub use loader::{load_source, system_font_database};

/// Raw bytes of one font, tagged with a name for logging.
#[derive(Clone)]
pub struct FontResource {
    name: String,
    bytes: Arc<[u8]>,
    index: u32,
}

impl fmt::Debug for FontResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResource")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("data_len", &self.bytes.len())
            .finish()
    }
}

impl FontResource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::with_index(name, bytes, 0)
    }

    /// A face inside a TrueType Collection.
    pub fn with_index(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>, index: u32) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Font resources supplied by the active theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeFonts {
    primary: HashMap<FontCategory, FontResource>,
    defaults: HashMap<FontCategory, FontResource>,
    emoji: Option<FontResource>,
}

impl ThemeFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary(mut self, category: FontCategory, resource: FontResource) -> Self {
        self.primary.insert(category, resource);
        self
    }

    pub fn with_default(mut self, category: FontCategory, resource: FontResource) -> Self {
        self.defaults.insert(category, resource);
        self
    }

    pub fn with_emoji(mut self, resource: FontResource) -> Self {
        self.emoji = Some(resource);
        self
    }

    /// The theme's own face for a category.
    pub fn primary(&self, category: FontCategory) -> Option<&FontResource> {
        self.primary.get(&category)
    }

    /// The built-in default face behind the primary one.
    pub fn default_font(&self, category: FontCategory) -> Option<&FontResource> {
        self.defaults.get(&category)
    }

    pub fn emoji(&self) -> Option<&FontResource> {
        self.emoji.as_ref()
    }

    /// Read every source named in `config`, looking families up in `db`.
    ///
    /// Sources that cannot be read are logged and left out; the resolver then
    /// falls back to whatever the category still has.
    pub fn from_config(config: &ThemeConfig, db: &fontdb::Database) -> Self {
        let mut theme = ThemeFonts::new();

        for category in FontCategory::ALL {
            if let Some(source) = config.primary_source(category) {
                match load_source(db, source, category) {
                    Ok(resource) => {
                        log::info!("Loaded {} font: {}", category, resource.name());
                        theme.primary.insert(category, resource);
                    }
                    Err(e) => log::warn!("{e}, will use the built-in default"),
                }
            }
            if let Some(source) = config.default_source(category) {
                match load_source(db, source, category) {
                    Ok(resource) => {
                        log::debug!("Loaded default {} font: {}", category, resource.name());
                        theme.defaults.insert(category, resource);
                    }
                    Err(e) => log::warn!("{e}"),
                }
            }
        }

        if let Some(source) = &config.emoji {
            match load_source(db, source, FontCategory::Regular) {
                Ok(resource) => {
                    log::info!("Loaded emoji font: {}", resource.name());
                    theme.emoji = Some(resource);
                }
                Err(e) => log::warn!("{e}, emoji fallback disabled"),
            }
        }

        theme
    }
}
