//! Replacement of runs whose only glyph is notdef.

use std::borrow::Cow;

use glyphline_config::SubstituteBaseline;

use crate::fixed::Fixed26_6;
use crate::text_shaper::{Direction, GlyphRunOutput, ShapingInput, Shaper};

/// Character drawn in place of a run no face could supply.
pub const REPLACEMENT_CHAR: &str = "\u{FFFD}";

/// A run ready for the accumulator, with its vertical placement.
#[derive(Debug, Clone)]
pub struct PlacedRun<'a> {
    /// What gets drawn and advanced over.
    pub run: Cow<'a, GlyphRunOutput>,
    /// Baseline y passed to the sink.
    pub baseline: Fixed26_6,
    /// Line thickness the run contributes to the height.
    pub thickness: Fixed26_6,
}

/// Place `run` on the shared baseline, swapping in a U+FFFD run when the
/// original is a single notdef glyph.
///
/// The substitute is shaped left-to-right with the original run's face and
/// size. The reported thickness stays that of the original run.
pub fn substitute_missing<'a>(
    run: &'a GlyphRunOutput,
    shared_baseline: Fixed26_6,
    shaper: &dyn Shaper,
    mode: SubstituteBaseline,
) -> PlacedRun<'a> {
    let thickness = run.bounds.thickness();
    if !run.is_unresolved() {
        return PlacedRun {
            run: Cow::Borrowed(run),
            baseline: shared_baseline,
            thickness,
        };
    }

    let substitute = shaper.shape(&ShapingInput {
        text: REPLACEMENT_CHAR,
        face: &run.face,
        direction: Direction::LeftToRight,
        script: None,
        size: run.size,
    });
    log::trace!(
        "Substituting U+FFFD for unresolved glyph in face {}",
        run.face.name()
    );

    let baseline = match mode {
        SubstituteBaseline::Shared => shared_baseline,
        SubstituteBaseline::OwnAscent => substitute.bounds.ascent,
    };
    PlacedRun {
        run: Cow::Owned(substitute),
        baseline,
        thickness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestFace;
    use crate::text_shaper::HarfBuzzShaper;

    fn shape(text: &str, face: &TestFace) -> GlyphRunOutput {
        HarfBuzzShaper::new().shape(&ShapingInput {
            text,
            face: &face.clone().into_arc(),
            direction: Direction::LeftToRight,
            script: None,
            size: Fixed26_6::from_int(10),
        })
    }

    #[test]
    fn test_resolved_run_is_borrowed() {
        let face = TestFace::new("t", "ab");
        let run = shape("ab", &face);
        let placed = substitute_missing(
            &run,
            Fixed26_6::from_int(9),
            &HarfBuzzShaper::new(),
            SubstituteBaseline::Shared,
        );
        assert!(matches!(placed.run, Cow::Borrowed(_)));
        assert_eq!(placed.baseline, Fixed26_6::from_int(9));
    }

    #[test]
    fn test_unresolved_run_uses_replacement_advance() {
        // U+FFFD maps to a glyph 300 units wide, notdef is 600
        let face = TestFace::new("t", "\u{FFFD}").with_advance(300.0);
        let run = shape("x", &face);
        assert!(run.is_unresolved());
        assert_eq!(run.advance, Fixed26_6::from_int(6));

        let placed = substitute_missing(
            &run,
            Fixed26_6::from_int(9),
            &HarfBuzzShaper::new(),
            SubstituteBaseline::Shared,
        );
        assert_eq!(placed.run.advance, Fixed26_6::from_int(3));
        assert_ne!(placed.run.glyphs[0].glyph_id, crate::face::NOTDEF);
        assert_eq!(placed.baseline, Fixed26_6::from_int(9));
        assert_eq!(placed.thickness, run.bounds.thickness());
    }

    #[test]
    fn test_own_ascent_mode() {
        let face = TestFace::new("t", "\u{FFFD}").with_vertical(700.0, 300.0, 0.0);
        let run = shape("x", &face);
        let placed = substitute_missing(
            &run,
            Fixed26_6::from_int(9),
            &HarfBuzzShaper::new(),
            SubstituteBaseline::OwnAscent,
        );
        assert_eq!(placed.baseline, Fixed26_6::from_int(7));
    }

    #[test]
    fn test_multi_glyph_run_with_notdef_is_kept() {
        let face = TestFace::new("t", "a\u{FFFD}");
        let run = shape("a?", &face);
        let placed = substitute_missing(
            &run,
            Fixed26_6::ZERO,
            &HarfBuzzShaper::new(),
            SubstituteBaseline::Shared,
        );
        assert!(matches!(placed.run, Cow::Borrowed(_)));
    }
}
