//! Default values for font settings.

use crate::types::{FontSlots, FontSource};

/// Primary faces: none configured, so every category uses its built-in default.
pub fn fonts() -> FontSlots {
    FontSlots::default()
}

/// Built-in default faces per category, looked up as system families.
pub fn builtin_default_fonts() -> FontSlots {
    FontSlots {
        regular: Some(FontSource::family("DejaVu Sans")),
        bold: Some(FontSource::family("DejaVu Sans")),
        italic: Some(FontSource::family("DejaVu Sans")),
        bold_italic: Some(FontSource::family("DejaVu Sans")),
        monospace: Some(FontSource::family("DejaVu Sans Mono")),
        symbol: Some(FontSource::family("Noto Sans Symbols 2")),
    }
}

pub fn emoji_font() -> Option<FontSource> {
    Some(FontSource::family("Noto Color Emoji"))
}
