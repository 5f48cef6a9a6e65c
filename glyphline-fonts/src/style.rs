//! Requested text style.

use glyphline_config::FontCategory;

/// Visual style requested for a string.
///
/// Used directly as a cache key, so equal field values hash and compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    pub symbol: bool,
    /// Tab width in spaces; zero or negative means "use the configured default".
    pub tab_width: i32,
}

impl TextStyle {
    pub fn regular() -> Self {
        Self::default()
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_monospace(mut self, monospace: bool) -> Self {
        self.monospace = monospace;
        self
    }

    pub fn with_symbol(mut self, symbol: bool) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_tab_width(mut self, tab_width: i32) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// The face category for this style.
    ///
    /// First match wins: monospace, then bold (with or without italic), then
    /// italic, then symbol, otherwise regular.
    pub fn category(&self) -> FontCategory {
        if self.monospace {
            FontCategory::Monospace
        } else if self.bold {
            if self.italic {
                FontCategory::BoldItalic
            } else {
                FontCategory::Bold
            }
        } else if self.italic {
            FontCategory::Italic
        } else if self.symbol {
            FontCategory::Symbol
        } else {
            FontCategory::Regular
        }
    }
}
