//! Text shaping using HarfBuzz via rustybuzz.
//!
//! This module provides:
//! - [`split_runs`]: splitting text into runs of one face, script and direction
//! - [`Shaper`]: the shaping engine seam, turning one run into positioned glyphs
//! - [`HarfBuzzShaper`]: the rustybuzz implementation, applying ligatures,
//!   kerning, contextual alternates and complex-script rules
//!
//! # Architecture
//!
//! 1. Grapheme cluster detection (unicode-segmentation)
//! 2. Script and direction detection (unicode-script, unicode-bidi)
//! 3. Face resolution per cluster through a [`FontMap`](crate::FontMap)
//! 4. Shaping of each run at a 26.6 pixel size
//!
//! Faces that carry no OpenType tables are shaped one glyph per character from
//! their character map.

mod segmenter;
mod types;

use std::str::FromStr;
use std::sync::Arc;

use rustybuzz::ttf_parser::Tag;
use rustybuzz::{Feature, GlyphBuffer, Language, UnicodeBuffer};
use unicode_script::Script;

use crate::face::NOTDEF;
use crate::fixed::Fixed26_6;

pub use segmenter::split_runs;
pub use types::{
    Direction, GlyphRunOutput, LineBounds, ShapedGlyph, ShapingInput, ShapingRun,
};

/// The shaping engine.
pub trait Shaper: Send + Sync {
    /// Shape one run into positioned glyphs.
    fn shape(&self, input: &ShapingInput<'_>) -> GlyphRunOutput;
}

/// Options for text shaping
#[derive(Debug, Clone)]
pub struct ShapingOptions {
    /// Enable standard, contextual and discretionary ligatures
    pub enable_ligatures: bool,

    /// Enable kerning adjustments
    pub enable_kerning: bool,

    /// Enable contextual alternates
    pub enable_contextual_alternates: bool,

    /// Language hint (e.g., "en" for English, "ar" for Arabic)
    pub language: Option<String>,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            enable_ligatures: true,
            enable_kerning: true,
            enable_contextual_alternates: true,
            language: None,
        }
    }
}

/// [`Shaper`] backed by rustybuzz.
#[derive(Debug, Clone)]
pub struct HarfBuzzShaper {
    options: ShapingOptions,
    features: Vec<Feature>,
}

impl HarfBuzzShaper {
    pub fn new() -> Self {
        Self::with_options(ShapingOptions::default())
    }

    pub fn with_options(options: ShapingOptions) -> Self {
        let features = build_features(&options);
        Self { options, features }
    }

    pub fn options(&self) -> &ShapingOptions {
        &self.options
    }

    fn shape_opentype(
        &self,
        face: &rustybuzz::Face<'_>,
        input: &ShapingInput<'_>,
        units_per_em: u16,
    ) -> Vec<ShapedGlyph> {
        let mut unicode_buffer = UnicodeBuffer::new();
        unicode_buffer.push_str(input.text);
        unicode_buffer.set_direction(input.direction.to_harfbuzz());

        if let Some(script) = input.script.and_then(harfbuzz_script) {
            unicode_buffer.set_script(script);
        }

        if let Some(ref lang_str) = self.options.language
            && let Ok(lang) = Language::from_str(lang_str)
        {
            unicode_buffer.set_language(lang);
        }

        unicode_buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(face, &self.features, unicode_buffer);
        extract_shaped_glyphs(&glyph_buffer, input.size, units_per_em)
    }

    fn shape_nominal(&self, input: &ShapingInput<'_>, units_per_em: u16) -> Vec<ShapedGlyph> {
        let mut glyphs: Vec<ShapedGlyph> = input
            .text
            .char_indices()
            .map(|(idx, ch)| {
                let glyph_id = input.face.nominal_glyph(ch).unwrap_or(NOTDEF);
                ShapedGlyph {
                    glyph_id,
                    cluster: idx as u32,
                    x_advance: input
                        .size
                        .scale_units(input.face.glyph_advance(glyph_id), units_per_em),
                    y_advance: Fixed26_6::ZERO,
                    x_offset: Fixed26_6::ZERO,
                    y_offset: Fixed26_6::ZERO,
                }
            })
            .collect();
        if input.direction == Direction::RightToLeft {
            glyphs.reverse();
        }
        glyphs
    }
}

impl Default for HarfBuzzShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl Shaper for HarfBuzzShaper {
    fn shape(&self, input: &ShapingInput<'_>) -> GlyphRunOutput {
        let metrics = input.face.metrics();
        let upem = metrics.units_per_em;

        let hb_face = input
            .face
            .opentype_data()
            .and_then(|data| rustybuzz::Face::from_slice(data.bytes, data.index));
        let glyphs = match hb_face {
            Some(face) => self.shape_opentype(&face, input, upem),
            None => self.shape_nominal(input, upem),
        };

        let advance = glyphs.iter().map(|g| g.x_advance).sum();
        let bounds = LineBounds {
            ascent: input.size.scale_units(metrics.ascent, upem),
            descent: input.size.scale_units(metrics.descent.abs(), upem),
            gap: input.size.scale_units(metrics.line_gap, upem),
        };

        GlyphRunOutput {
            face: Arc::clone(input.face),
            glyphs,
            advance,
            bounds,
            direction: input.direction,
            size: input.size,
        }
    }
}

/// Build the OpenType feature list from the options.
fn build_features(options: &ShapingOptions) -> Vec<Feature> {
    let mut tags: Vec<&str> = Vec::new();

    // Standard (liga), contextual (clig) and discretionary (dlig) ligatures
    if options.enable_ligatures {
        tags.extend(["liga", "clig", "dlig"]);
    }
    if options.enable_kerning {
        tags.push("kern");
    }
    if options.enable_contextual_alternates {
        tags.push("calt");
    }
    // Glyph composition (ccmp) is required for emoji and complex scripts;
    // localized forms (locl) pick language-specific variants
    tags.extend(["ccmp", "locl"]);

    tags.into_iter()
        .filter_map(|tag| Feature::from_str(tag).ok())
        .collect()
}

/// Convert a Unicode script to the engine's script by ISO 15924 tag.
///
/// Script-neutral values return `None` so the engine detects them.
fn harfbuzz_script(script: Script) -> Option<rustybuzz::Script> {
    if matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
        return None;
    }
    let tag: [u8; 4] = script.short_name().as_bytes().try_into().ok()?;
    rustybuzz::Script::from_iso15924_tag(Tag::from_bytes(&tag))
}

/// Extract shaped glyphs from the HarfBuzz glyph buffer, scaled to `size`.
fn extract_shaped_glyphs(
    buffer: &GlyphBuffer,
    size: Fixed26_6,
    units_per_em: u16,
) -> Vec<ShapedGlyph> {
    let scale = |units: i32| size.scale_units(units as f32, units_per_em);
    buffer
        .glyph_infos()
        .iter()
        .zip(buffer.glyph_positions())
        .map(|(info, pos)| ShapedGlyph {
            glyph_id: u16::try_from(info.glyph_id).unwrap_or(NOTDEF),
            cluster: info.cluster,
            x_advance: scale(pos.x_advance),
            y_advance: scale(pos.y_advance),
            x_offset: scale(pos.x_offset),
            y_offset: scale(pos.y_offset),
        })
        .collect()
}
