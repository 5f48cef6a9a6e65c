//! In-memory faces for unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use crate::face::{FaceMetrics, FontFace, GlyphId, NOTDEF, RasterizedGlyph};

/// A face covering a fixed set of characters.
///
/// 1000 units per em, every mapped glyph advances `advance` units and notdef
/// advances 600. Glyphs rasterize as solid 2x2 squares sitting on the baseline.
#[derive(Debug, Clone)]
pub(crate) struct TestFace {
    name: String,
    glyphs: HashMap<char, GlyphId>,
    advance: f32,
    metrics: FaceMetrics,
}

impl TestFace {
    pub(crate) fn new(name: &str, chars: &str) -> Self {
        let glyphs = chars
            .chars()
            .enumerate()
            .map(|(i, ch)| (ch, i as GlyphId + 1))
            .collect();
        Self {
            name: name.to_string(),
            glyphs,
            advance: 500.0,
            metrics: FaceMetrics {
                units_per_em: 1000,
                ascent: 800.0,
                descent: 200.0,
                line_gap: 0.0,
            },
        }
    }

    pub(crate) fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub(crate) fn with_vertical(mut self, ascent: f32, descent: f32, line_gap: f32) -> Self {
        self.metrics.ascent = ascent;
        self.metrics.descent = descent;
        self.metrics.line_gap = line_gap;
        self
    }

    pub(crate) fn into_arc(self) -> Arc<dyn FontFace> {
        Arc::new(self)
    }
}

impl FontFace for TestFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        self.glyphs.get(&ch).copied()
    }

    fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn glyph_advance(&self, glyph: GlyphId) -> f32 {
        if glyph == NOTDEF { 600.0 } else { self.advance }
    }

    fn rasterize(&self, _glyph: GlyphId, _size_px: f32) -> Option<RasterizedGlyph> {
        Some(RasterizedGlyph {
            width: 2,
            height: 2,
            left: 0,
            top: 2,
            pixels: vec![255; 16],
            is_colored: false,
        })
    }
}
