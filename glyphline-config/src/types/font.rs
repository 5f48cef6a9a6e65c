//! Font category and font source configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Font Categories
// ============================================================================

/// The style category a face is selected for.
///
/// A text style resolves to exactly one category; each category has its own
/// primary face and built-in default face in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontCategory {
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Monospace,
    Symbol,
}

impl FontCategory {
    /// All categories in declaration order.
    pub const ALL: [FontCategory; 6] = [
        FontCategory::Regular,
        FontCategory::Bold,
        FontCategory::Italic,
        FontCategory::BoldItalic,
        FontCategory::Monospace,
        FontCategory::Symbol,
    ];

    /// Whether a system lookup for this category should ask for a bold weight.
    pub fn is_bold(self) -> bool {
        matches!(self, FontCategory::Bold | FontCategory::BoldItalic)
    }

    /// Whether a system lookup for this category should ask for an italic style.
    pub fn is_italic(self) -> bool {
        matches!(self, FontCategory::Italic | FontCategory::BoldItalic)
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontCategory::Regular => "regular",
            FontCategory::Bold => "bold",
            FontCategory::Italic => "italic",
            FontCategory::BoldItalic => "bold italic",
            FontCategory::Monospace => "monospace",
            FontCategory::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Font Sources
// ============================================================================

/// Where the bytes of a face come from.
///
/// In YAML this is written as `{ path: /usr/share/fonts/x.ttf }` or
/// `{ family: "DejaVu Sans" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSource {
    /// A font file on disk (TTF/OTF/TTC, face index 0).
    Path { path: PathBuf },
    /// A system font family, looked up with the category's weight and style.
    Family { family: String },
}

impl FontSource {
    /// Convenience constructor for a family source.
    pub fn family(name: impl Into<String>) -> Self {
        FontSource::Family {
            family: name.into(),
        }
    }

    /// Convenience constructor for a file source.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path { path: path.into() }
    }

    /// Human readable label used in log lines.
    pub fn label(&self) -> String {
        match self {
            FontSource::Path { path } => path.display().to_string(),
            FontSource::Family { family } => family.clone(),
        }
    }
}

/// One optional [`FontSource`] per [`FontCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_italic: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monospace: Option<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<FontSource>,
}

impl FontSlots {
    /// Get the source configured for a category, if any.
    pub fn get(&self, category: FontCategory) -> Option<&FontSource> {
        match category {
            FontCategory::Regular => self.regular.as_ref(),
            FontCategory::Bold => self.bold.as_ref(),
            FontCategory::Italic => self.italic.as_ref(),
            FontCategory::BoldItalic => self.bold_italic.as_ref(),
            FontCategory::Monospace => self.monospace.as_ref(),
            FontCategory::Symbol => self.symbol.as_ref(),
        }
    }
}
