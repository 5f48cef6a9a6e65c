//! Shared fixtures: faces built from a list of characters and a provider that
//! counts how often it parses.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use glyphline_config::FontCategory;
use glyphline_fonts::face::{FaceMetrics, GlyphId, NOTDEF};
use glyphline_fonts::{
    FaceProvider, FontError, FontFace, FontResource, HarfBuzzShaper, LayoutOptions, TextEngine,
    ThemeFonts,
};

/// Face mapping a fixed character set; 1000 units per em, 800/200 ascent and
/// descent, glyph advance 500 units, notdef advance 600 units.
#[derive(Debug)]
pub struct MockFace {
    name: String,
    glyphs: HashMap<char, GlyphId>,
    ascent: f32,
}

impl MockFace {
    pub fn new(name: &str, chars: &str, ascent: f32) -> Self {
        Self {
            name: name.to_string(),
            glyphs: chars
                .chars()
                .enumerate()
                .map(|(i, ch)| (ch, i as GlyphId + 1))
                .collect(),
            ascent,
        }
    }
}

impl FontFace for MockFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        self.glyphs.get(&ch).copied()
    }

    fn metrics(&self) -> FaceMetrics {
        FaceMetrics {
            units_per_em: 1000,
            ascent: self.ascent,
            descent: 200.0,
            line_gap: 0.0,
        }
    }

    fn glyph_advance(&self, glyph: GlyphId) -> f32 {
        if glyph == NOTDEF { 600.0 } else { 500.0 }
    }
}

/// Parses resource bytes as UTF-8 and maps every character in them.
///
/// A resource whose bytes start with `!` fails to parse. A resource named
/// `*-tall` gets an ascent of 1000 units instead of 800.
#[derive(Default)]
pub struct CountingProvider {
    parses: AtomicUsize,
}

impl CountingProvider {
    pub fn parses(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }
}

impl FaceProvider for CountingProvider {
    fn parse(&self, resource: &FontResource) -> Result<Arc<dyn FontFace>, FontError> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        let bytes = resource.bytes();
        let parse_error = || FontError::Parse {
            name: resource.name().to_string(),
        };
        let chars = std::str::from_utf8(&bytes).map_err(|_| parse_error())?;
        if chars.starts_with('!') {
            return Err(parse_error());
        }
        let ascent = if resource.name().ends_with("-tall") { 1000.0 } else { 800.0 };
        Ok(Arc::new(MockFace::new(resource.name(), chars, ascent)))
    }
}

pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,\u{FFFD}";

pub fn resource(name: &str, chars: &str) -> FontResource {
    FontResource::new(name, chars.as_bytes().to_vec())
}

/// Every category gets a primary and a default face named after it, plus an
/// emoji face.
pub fn full_theme() -> ThemeFonts {
    let mut theme = ThemeFonts::new().with_emoji(resource("emoji-tall", "\u{1F600}"));
    for category in FontCategory::ALL {
        let name = category.to_string().replace(' ', "-");
        theme = theme
            .with_primary(category, resource(&name, LATIN))
            .with_default(category, resource(&format!("{name}-default"), LATIN));
    }
    theme
}

pub fn engine_with(theme: ThemeFonts) -> (TextEngine, Arc<CountingProvider>) {
    let provider = Arc::new(CountingProvider::default());
    let engine = TextEngine::new(
        theme,
        Arc::clone(&provider) as Arc<dyn FaceProvider>,
        Arc::new(HarfBuzzShaper::new()),
        LayoutOptions::default(),
    );
    (engine, provider)
}
