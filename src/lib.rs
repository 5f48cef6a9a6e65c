//! glyphline: text shaping, measurement and glyph rendering.
//!
//! The pipeline lives in [`glyphline_fonts`] and its configuration in
//! [`glyphline_config`]; this crate re-exports both and hosts the command line
//! front end.

pub mod cli;

pub use glyphline_config as config;
pub use glyphline_fonts as fonts;

pub use glyphline_config::{ConfigError, ThemeConfig};
pub use glyphline_fonts::{
    FontError, GlyphSink, ImagePen, LayoutResult, Size, TextEngine, TextStyle, ThemeFonts,
};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
