//! Tab-aware line layout.
//!
//! A string is laid out as one line:
//! 1. Carriage returns are dropped and the text is cut at every tab
//! 2. Each piece is split into runs and shaped; the piece's baseline is the
//!    largest ascent among its runs
//! 3. Unresolved runs are replaced with U+FFFD
//! 4. Runs are handed to a [`GlyphSink`] left to right while the pen advances
//! 5. A tab moves the pen to the next multiple of the tab stop width
//!
//! The same walk serves drawing and measuring, so both always agree.

mod substitute;

use std::borrow::Cow;

use glyphline_config::{LayoutConfig, SubstituteBaseline};

use crate::face_set::{FaceSet, FontMap};
use crate::fixed::Fixed26_6;
use crate::sink::GlyphSink;
use crate::text_shaper::{GlyphRunOutput, ShapingInput, Shaper, split_runs};

pub use substitute::{PlacedRun, REPLACEMENT_CHAR, substitute_missing};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Geometry of one laid-out string, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    pub width: f32,
    /// Largest line thickness over all runs.
    pub height: f32,
    /// Distance from the top of the line to the baseline.
    pub baseline: f32,
    /// Final pen position. Equal to `width`.
    pub advance: f32,
}

impl LayoutResult {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Layout settings shared by every call.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Tab width in spaces when the caller passes a non-positive one.
    pub default_tab_width: u32,
    /// Unscaled width of one tab space when the faces have no space advance.
    pub tab_space_fallback: f32,
    pub substitute_baseline: SubstituteBaseline,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for LayoutOptions {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            default_tab_width: config.default_tab_width,
            tab_space_fallback: config.tab_space_fallback,
            substitute_baseline: config.substitute_baseline,
        }
    }
}

/// Per-call text parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextParams {
    /// Font size in density-independent pixels.
    pub font_size: f32,
    /// Device pixels per density-independent pixel.
    pub scale: f32,
    /// Tab width in spaces; non-positive uses the configured default.
    pub tab_width: i32,
}

impl TextParams {
    pub fn new(font_size: f32, scale: f32, tab_width: i32) -> Self {
        Self {
            font_size,
            scale,
            tab_width,
        }
    }

    /// Shaping size in device pixels.
    pub fn pixel_size(&self) -> Fixed26_6 {
        Fixed26_6::from_f32(self.font_size * self.scale)
    }

    /// Tab width in spaces after applying `default` to non-positive overrides.
    pub fn effective_tab_width(&self, default: u32) -> u32 {
        if self.tab_width > 0 {
            self.tab_width as u32
        } else {
            default
        }
    }
}

/// Runs of one tab-free piece of text, shaped.
#[derive(Debug, Clone)]
pub struct ShapedSubstring {
    pub runs: Vec<GlyphRunOutput>,
    /// Largest ascent among the runs.
    pub baseline: Fixed26_6,
}

/// Pen movement and line extent produced by the accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub advance: Fixed26_6,
    pub height: Fixed26_6,
}

/// Lays out text with one face set, shaper and parameter set.
pub struct TextLayout<'a> {
    faces: &'a FaceSet,
    shaper: &'a dyn Shaper,
    options: &'a LayoutOptions,
    params: TextParams,
}

impl<'a> TextLayout<'a> {
    pub fn new(
        faces: &'a FaceSet,
        shaper: &'a dyn Shaper,
        options: &'a LayoutOptions,
        params: TextParams,
    ) -> Self {
        Self {
            faces,
            shaper,
            options,
            params,
        }
    }

    /// Lay out `text` as a single line, feeding every run to `sink`.
    pub fn process_string(&self, text: &str, sink: &mut dyn GlyphSink) -> LayoutResult {
        let text: Cow<'_, str> = if text.contains('\r') {
            Cow::Owned(text.replace('\r', ""))
        } else {
            Cow::Borrowed(text)
        };

        let mut x = Fixed26_6::ZERO;
        let mut height = Fixed26_6::ZERO;
        let mut baseline = Fixed26_6::ZERO;
        let mut tab_stop: Option<f32> = None;

        let mut pieces = text.split('\t').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                let shaped = self.shape_substring(piece);
                let extent = self.place(&shaped, x, sink);
                x += extent.advance;
                height = height.max(extent.height);
                baseline = baseline.max(shaped.baseline);
            }
            if pieces.peek().is_some() {
                let width = *tab_stop.get_or_insert_with(|| self.tab_stop_width());
                x = next_tab_stop(x, width);
            }
        }

        LayoutResult {
            width: x.to_f32(),
            height: height.to_f32(),
            baseline: baseline.to_f32(),
            advance: x.to_f32(),
        }
    }

    /// Split a tab-free piece into runs and shape each one.
    pub fn shape_substring(&self, text: &str) -> ShapedSubstring {
        let size = self.params.pixel_size();
        let runs: Vec<GlyphRunOutput> = split_runs(text, self.faces)
            .iter()
            .map(|run| {
                self.shaper.shape(&ShapingInput {
                    text: run.text(text),
                    face: self.faces.face(run.face_index),
                    direction: run.direction,
                    script: Some(run.script),
                    size,
                })
            })
            .collect();
        let baseline = runs
            .iter()
            .map(|run| run.bounds.ascent)
            .max()
            .unwrap_or(Fixed26_6::ZERO);
        ShapedSubstring { runs, baseline }
    }

    /// Width of one tab stop in pixels.
    pub fn tab_stop_width(&self) -> f32 {
        let spaces = self.params.effective_tab_width(self.options.default_tab_width);
        let space: Fixed26_6 = self
            .shape_substring(" ")
            .runs
            .iter()
            .map(|run| run.advance)
            .sum();
        let space_px = if space > Fixed26_6::ZERO {
            space.to_f32()
        } else {
            log::trace!("No space advance in face set, using the fallback tab space");
            self.options.tab_space_fallback * self.params.scale
        };
        spaces as f32 * space_px
    }

    fn place(&self, shaped: &ShapedSubstring, start_x: Fixed26_6, sink: &mut dyn GlyphSink) -> Extent {
        let placed: Vec<PlacedRun<'_>> = shaped
            .runs
            .iter()
            .map(|run| {
                substitute_missing(
                    run,
                    shaped.baseline,
                    self.shaper,
                    self.options.substitute_baseline,
                )
            })
            .collect();
        accumulate(&placed, start_x, sink)
    }
}

/// Walk placed runs left to right, passing each to `sink` at the pen.
pub fn accumulate(runs: &[PlacedRun<'_>], start_x: Fixed26_6, sink: &mut dyn GlyphSink) -> Extent {
    let mut x = start_x;
    let mut height = Fixed26_6::ZERO;
    for placed in runs {
        sink.accept(&placed.run, x.to_f32(), placed.baseline.to_f32());
        x += placed.run.advance;
        height = height.max(placed.thickness);
    }
    Extent {
        advance: x - start_x,
        height,
    }
}

/// The first tab stop strictly after `x`.
fn next_tab_stop(x: Fixed26_6, tab_width: f32) -> Fixed26_6 {
    if tab_width <= 0.0 {
        return x;
    }
    let x = x.to_f32();
    Fixed26_6::from_f32(tab_width * ((x + tab_width) / tab_width).floor())
}
