//! Splitting text into runs of one face, script and direction.

use unicode_bidi::{BidiClass, bidi_class};
use unicode_script::{Script, UnicodeScript};
use unicode_segmentation::UnicodeSegmentation;

use super::types::{Direction, ShapingRun};
use crate::face_set::FontMap;

/// A run still being extended.
struct PendingRun {
    start: usize,
    end: usize,
    face_index: usize,
    script: Script,
    direction: Option<Direction>,
}

impl PendingRun {
    fn accepts(&self, face_index: usize, script: Script, direction: Option<Direction>) -> bool {
        let script_break = !is_neutral(script) && !is_neutral(self.script) && script != self.script;
        let direction_break = matches!(
            (self.direction, direction),
            (Some(current), Some(next)) if current != next
        );
        face_index == self.face_index && !script_break && !direction_break
    }

    fn extend(&mut self, end: usize, script: Script, direction: Option<Direction>) {
        self.end = end;
        if is_neutral(self.script) && !is_neutral(script) {
            self.script = script;
        }
        if self.direction.is_none() {
            self.direction = direction;
        }
    }

    fn finish(&self) -> ShapingRun {
        ShapingRun {
            start: self.start,
            end: self.end,
            face_index: self.face_index,
            script: self.script,
            direction: self.direction.unwrap_or_default(),
        }
    }
}

/// Split `text` into runs that can each be shaped with a single face.
///
/// Runs break wherever the resolved face, the script or the direction changes.
/// Script-neutral characters (spaces, digits, punctuation) and direction-neutral
/// characters join the current run, and whitespace stays with the current face
/// when that face can render it. Grapheme clusters are never split, and each
/// cluster's face is chosen by its first character.
pub fn split_runs(text: &str, fonts: &dyn FontMap) -> Vec<ShapingRun> {
    let mut runs = Vec::new();
    let mut current: Option<PendingRun> = None;

    for (idx, cluster) in text.grapheme_indices(true) {
        let Some(ch) = cluster.chars().next() else {
            continue;
        };
        let script = ch.script();
        let direction = char_direction(ch);
        let end = idx + cluster.len();

        match current.as_mut() {
            Some(run) => {
                let face_index =
                    if ch.is_whitespace() && fonts.face(run.face_index).has_glyph(ch) {
                        run.face_index
                    } else {
                        fonts.resolve_face(ch)
                    };
                if run.accepts(face_index, script, direction) {
                    run.extend(end, script, direction);
                } else {
                    runs.push(run.finish());
                    *run = PendingRun {
                        start: idx,
                        end,
                        face_index,
                        script,
                        direction,
                    };
                }
            }
            None => {
                current = Some(PendingRun {
                    start: idx,
                    end,
                    face_index: fonts.resolve_face(ch),
                    script,
                    direction,
                });
            }
        }
    }

    if let Some(run) = current {
        runs.push(run.finish());
    }
    runs
}

fn is_neutral(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited | Script::Unknown)
}

fn char_direction(ch: char) -> Option<Direction> {
    match bidi_class(ch) {
        BidiClass::L => Some(Direction::LeftToRight),
        BidiClass::R | BidiClass::AL => Some(Direction::RightToLeft),
        _ => None,
    }
}
