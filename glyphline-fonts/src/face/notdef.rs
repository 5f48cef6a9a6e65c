//! Built-in face used when a category has no loadable face at all.

use super::{FaceMetrics, FontFace, GlyphId, NOTDEF, RasterizedGlyph};

const UNITS_PER_EM: u16 = 1000;
const ASCENT: f32 = 800.0;
const DESCENT: f32 = 200.0;
const ADVANCE: f32 = 600.0;

/// A face with sensible metrics and no character map.
///
/// Every character shapes to notdef, which renders as a hollow box, so text
/// stays measurable and visible even when every configured font failed.
#[derive(Debug, Clone, Default)]
pub struct NotdefFace;

impl NotdefFace {
    pub fn new() -> Self {
        Self
    }
}

impl FontFace for NotdefFace {
    fn name(&self) -> &str {
        "builtin-notdef"
    }

    fn nominal_glyph(&self, _ch: char) -> Option<GlyphId> {
        None
    }

    fn metrics(&self) -> FaceMetrics {
        FaceMetrics {
            units_per_em: UNITS_PER_EM,
            ascent: ASCENT,
            descent: DESCENT,
            line_gap: 0.0,
        }
    }

    fn glyph_advance(&self, _glyph: GlyphId) -> f32 {
        ADVANCE
    }

    fn rasterize(&self, glyph: GlyphId, size_px: f32) -> Option<RasterizedGlyph> {
        if glyph != NOTDEF || size_px < 2.0 {
            return None;
        }
        let em = size_px / f32::from(UNITS_PER_EM);
        let width = ((ADVANCE - 100.0) * em).round().max(2.0) as u32;
        let height = ((ASCENT - 100.0) * em).round().max(2.0) as u32;

        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                pixels.extend_from_slice(&[255, 255, 255, if edge { 255 } else { 0 }]);
            }
        }

        Some(RasterizedGlyph {
            width,
            height,
            left: (50.0 * em).round() as i32,
            top: height as i32,
            pixels,
            is_colored: false,
        })
    }
}
