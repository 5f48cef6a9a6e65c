//! Ordered face fallback chains.
//!
//! A [`FaceSet`] is the chain of faces used for one text style:
//! 1. Primary face for the style's category (or the built-in default in its place)
//! 2. The category's built-in default, when the primary loaded as well
//! 3. The theme's emoji face, if any
//!
//! Lookup is first match wins; characters no face can render resolve to the
//! first face so they come out as its notdef glyph.

mod resolver;

use std::sync::Arc;

use crate::face::FontFace;

pub use resolver::FaceSetResolver;

/// Resolves characters to faces during run splitting.
pub trait FontMap {
    /// Index of the face that should render `ch`.
    fn resolve_face(&self, ch: char) -> usize;

    /// The face at `index`, as returned by [`FontMap::resolve_face`].
    fn face(&self, index: usize) -> &Arc<dyn FontFace>;
}

/// A non-empty, ordered fallback chain of faces.
#[derive(Debug, Clone)]
pub struct FaceSet {
    faces: Vec<Arc<dyn FontFace>>,
}

impl FaceSet {
    /// Build a set; `primary` always lands at index 0.
    pub fn new(
        primary: Arc<dyn FontFace>,
        fallbacks: impl IntoIterator<Item = Arc<dyn FontFace>>,
    ) -> Self {
        let mut faces = vec![primary];
        faces.extend(fallbacks);
        Self { faces }
    }

    pub fn primary(&self) -> &Arc<dyn FontFace> {
        &self.faces[0]
    }

    pub fn faces(&self) -> &[Arc<dyn FontFace>] {
        &self.faces
    }
}

impl FontMap for FaceSet {
    fn resolve_face(&self, ch: char) -> usize {
        self.faces
            .iter()
            .position(|face| face.has_glyph(ch))
            .unwrap_or(0)
    }

    fn face(&self, index: usize) -> &Arc<dyn FontFace> {
        self.faces.get(index).unwrap_or(&self.faces[0])
    }
}
