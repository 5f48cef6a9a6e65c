//! Default values for layout settings.

pub fn default_tab_width() -> u32 {
    4
}

pub fn tab_space_fallback() -> f32 {
    10.0 // Pixels per tab "space" when no space glyph can be measured
}
