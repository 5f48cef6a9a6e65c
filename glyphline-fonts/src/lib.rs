//! Text shaping, measurement and glyph rendering for glyphline.
//!
//! This crate provides:
//! - Per-style font fallback chains resolved from a font theme
//! - Tab-aware line layout with a shared baseline across mixed-font runs
//! - Script and direction run splitting over grapheme clusters
//! - HarfBuzz-based text shaping via rustybuzz
//! - Missing-glyph substitution with U+FFFD
//! - Cached measurements that always agree with what gets drawn
//!
//! # Architecture
//!
//! [`TextEngine`] is the entry point. For each call it resolves the style's
//! [`FaceSet`] through a [`FaceSetResolver`]:
//! 1. Primary face for the style's category (or the built-in default in its place)
//! 2. The category's built-in default face
//! 3. The emoji face
//!
//! then lays the string out with [`TextLayout`], handing every shaped run to a
//! [`GlyphSink`]. Measuring uses a [`MeasureSink`] and caches the result in a
//! [`MetricsCache`].

mod engine;
mod error;
pub mod face;
pub mod face_set;
mod fixed;
pub mod layout;
mod metrics_cache;
pub mod sink;
mod style;
pub mod text_shaper;
pub mod theme;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use engine::TextEngine;
pub use error::FontError;
pub use face::{FaceProvider, FontFace, NotdefFace, SwashFace, SwashFaceProvider};
pub use face_set::{FaceSet, FaceSetResolver, FontMap};
pub use fixed::Fixed26_6;
pub use layout::{LayoutOptions, LayoutResult, Size, TextLayout, TextParams};
pub use metrics_cache::{MetricsCache, TextMetrics};
pub use sink::{FnSink, GlyphSink, ImagePen, ImageSink, MeasureSink};
pub use style::TextStyle;
pub use text_shaper::{
    Direction, GlyphRunOutput, HarfBuzzShaper, ShapedGlyph, Shaper, ShapingInput, ShapingOptions,
    ShapingRun, split_runs,
};
pub use theme::{FontResource, ThemeFonts};
