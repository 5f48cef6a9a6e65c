//! Font face capability and its implementations.
//!
//! Every face the pipeline touches, whatever its origin (theme primary, theme
//! default, emoji, built-in notdef), is used through the [`FontFace`] trait.
//! Bytes become faces through a [`FaceProvider`].

mod notdef;
mod swash_face;

use std::fmt;
use std::sync::Arc;

use crate::error::FontError;
use crate::theme::FontResource;

pub use notdef::NotdefFace;
pub use swash_face::{SwashFace, SwashFaceProvider};

/// Glyph index within a face.
pub type GlyphId = u16;

/// The glyph every face uses for "no glyph for this character".
pub const NOTDEF: GlyphId = 0;

/// Face-wide vertical metrics in font design units.
///
/// `descent` is the positive distance below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub units_per_em: u16,
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

/// Raw OpenType data backing a face, for the HarfBuzz shaping engine.
#[derive(Debug, Clone, Copy)]
pub struct OpenTypeData<'a> {
    pub bytes: &'a [u8],
    /// Face index within a collection (0 for single-face files).
    pub index: u32,
}

/// A rasterized glyph as RGBA pixels.
///
/// Mask glyphs are stored as white with the coverage in alpha so they can be
/// tinted; color glyphs (emoji) keep their own colors.
pub struct RasterizedGlyph {
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the left edge.
    pub left: i32,
    /// Offset from the baseline up to the top edge.
    pub top: i32,
    pub pixels: Vec<u8>,
    pub is_colored: bool,
}

impl fmt::Debug for RasterizedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterizedGlyph")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("top", &self.top)
            .field("is_colored", &self.is_colored)
            .finish()
    }
}

/// A queryable font face: glyph lookup, metrics and optional rendering.
pub trait FontFace: Send + Sync + fmt::Debug {
    /// Name of the resource this face was loaded from.
    fn name(&self) -> &str;

    /// Glyph mapped to `ch` by the face's character map, if any.
    fn nominal_glyph(&self, ch: char) -> Option<GlyphId>;

    /// Whether the face can render `ch` without falling back to notdef.
    fn has_glyph(&self, ch: char) -> bool {
        self.nominal_glyph(ch).is_some()
    }

    fn metrics(&self) -> FaceMetrics;

    /// Horizontal advance of a glyph in font design units.
    fn glyph_advance(&self, glyph: GlyphId) -> f32;

    /// OpenType tables for the shaping engine. Faces without them are shaped
    /// one glyph per character through [`FontFace::nominal_glyph`].
    fn opentype_data(&self) -> Option<OpenTypeData<'_>> {
        None
    }

    /// Render a glyph at `size_px`. `None` when the face cannot draw it.
    fn rasterize(&self, _glyph: GlyphId, _size_px: f32) -> Option<RasterizedGlyph> {
        None
    }
}

/// Turns raw font bytes into a face.
pub trait FaceProvider: Send + Sync {
    /// Parse a resource into a face.
    ///
    /// # Errors
    /// Returns [`FontError::Parse`] when the bytes are not a usable face.
    fn parse(&self, resource: &FontResource) -> Result<Arc<dyn FontFace>, FontError>;
}
