//! Text layout settings: tab expansion and missing-glyph substitution.

use serde::{Deserialize, Serialize};

/// Vertical origin used when drawing a replacement glyph for a run whose only
/// glyph could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubstituteBaseline {
    /// Align the replacement glyph to the substring's shared baseline, like
    /// every other run (default)
    #[default]
    Shared,
    /// Align the replacement glyph to its own ascent. Matches older renderers
    /// pixel for pixel but can sit off the line in mixed-font text.
    OwnAscent,
}

/// Layout settings applied to every measured or drawn string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Tab width in spaces, used when a style does not override it.
    #[serde(default = "crate::defaults::default_tab_width")]
    pub default_tab_width: u32,

    /// Width in unscaled pixels of one tab "space" when the face set has no
    /// measurable space glyph.
    #[serde(default = "crate::defaults::tab_space_fallback")]
    pub tab_space_fallback: f32,

    /// Vertical origin for replacement glyphs.
    #[serde(default)]
    pub substitute_baseline: SubstituteBaseline,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_tab_width: crate::defaults::default_tab_width(),
            tab_space_fallback: crate::defaults::tab_space_fallback(),
            substitute_baseline: SubstituteBaseline::default(),
        }
    }
}
