//! Shaping inputs and outputs.

use std::sync::Arc;

use unicode_script::Script;

use crate::face::{FontFace, GlyphId, NOTDEF};
use crate::fixed::Fixed26_6;

/// Writing direction of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub(crate) fn to_harfbuzz(self) -> rustybuzz::Direction {
        match self {
            Direction::LeftToRight => rustybuzz::Direction::LeftToRight,
            Direction::RightToLeft => rustybuzz::Direction::RightToLeft,
        }
    }
}

/// Vertical extent of a shaped run at its size.
///
/// `descent` is the positive distance below the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBounds {
    pub ascent: Fixed26_6,
    pub descent: Fixed26_6,
    pub gap: Fixed26_6,
}

impl LineBounds {
    /// Total height a line of this run occupies.
    pub fn thickness(&self) -> Fixed26_6 {
        self.ascent + self.descent + self.gap
    }
}

/// A single shaped glyph with positioning information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    /// Glyph ID from the face
    pub glyph_id: GlyphId,

    /// Byte offset of the first input character this glyph represents
    pub cluster: u32,

    /// Horizontal advance
    pub x_advance: Fixed26_6,

    /// Vertical advance (usually 0 for horizontal text)
    pub y_advance: Fixed26_6,

    /// Horizontal offset from the pen position
    pub x_offset: Fixed26_6,

    /// Vertical offset from the baseline, positive up
    pub y_offset: Fixed26_6,
}

/// A contiguous slice of text with one face, script and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapingRun {
    /// Byte range within the text that was split.
    pub start: usize,
    pub end: usize,
    /// Index into the face set that resolved this run.
    pub face_index: usize,
    pub script: Script,
    pub direction: Direction,
}

impl ShapingRun {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Everything the shaping engine needs for one run.
#[derive(Debug, Clone, Copy)]
pub struct ShapingInput<'a> {
    pub text: &'a str,
    pub face: &'a Arc<dyn FontFace>,
    pub direction: Direction,
    /// Script hint; `None` lets the engine detect it.
    pub script: Option<Script>,
    /// Pixel size in 26.6.
    pub size: Fixed26_6,
}

/// The shaped result of one run. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct GlyphRunOutput {
    pub face: Arc<dyn FontFace>,
    pub glyphs: Vec<ShapedGlyph>,
    /// Sum of the glyph advances
    pub advance: Fixed26_6,
    pub bounds: LineBounds,
    pub direction: Direction,
    pub size: Fixed26_6,
}

impl GlyphRunOutput {
    /// True when the run is a single glyph that no face could supply.
    pub fn is_unresolved(&self) -> bool {
        matches!(self.glyphs.as_slice(), [glyph] if glyph.glyph_id == NOTDEF)
    }
}
