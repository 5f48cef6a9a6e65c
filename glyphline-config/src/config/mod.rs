//! Core `ThemeConfig` struct definition.
//!
//! # Sub-modules
//!
//! - [`persistence`]: `load` / `save` (YAML file I/O with atomic write) and path helpers
//! - [`config_methods`]: validation and per-category source lookup

mod config_methods;
mod persistence;

use serde::{Deserialize, Serialize};

use crate::types::{FontSlots, FontSource, LayoutConfig};

/// Font theme and layout configuration.
///
/// ```yaml
/// fonts:
///   regular: { path: /home/me/.fonts/Inter-Regular.ttf }
///   monospace: { family: JetBrains Mono }
/// emoji: { family: Noto Color Emoji }
/// layout:
///   default_tab_width: 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary faces per category. Unset slots fall back to `defaults`.
    #[serde(default = "crate::defaults::fonts")]
    pub fonts: FontSlots,

    /// Built-in default faces per category, used behind the primary face and
    /// in its place when the primary fails to load.
    #[serde(default = "crate::defaults::builtin_default_fonts")]
    pub defaults: FontSlots,

    /// Emoji/symbol face appended to every face set, regardless of category.
    #[serde(default = "crate::defaults::emoji_font")]
    pub emoji: Option<FontSource>,

    /// Tab expansion and glyph substitution settings.
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            fonts: crate::defaults::fonts(),
            defaults: crate::defaults::builtin_default_fonts(),
            emoji: crate::defaults::emoji_font(),
            layout: LayoutConfig::default(),
        }
    }
}
