//! Typed error types for glyphline-fonts.
//!
//! None of these ever reach a measure or draw caller: the pipeline logs them
//! and degrades to whatever faces remain. They are public so theme loading and
//! custom [`FaceProvider`](crate::FaceProvider) implementations can report
//! failures precisely.

use std::path::PathBuf;

use glyphline_config::FontCategory;
use thiserror::Error;

/// Failure to obtain a usable face from a font source.
#[derive(Debug, Error)]
pub enum FontError {
    /// The bytes were read but are not a parseable TrueType/OpenType face.
    #[error("font load error: '{name}' could not be parsed as a font face")]
    Parse {
        /// Resource name of the rejected font.
        name: String,
    },

    /// A font file named in the theme could not be read.
    #[error("failed to read font file '{}': {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A family named in the theme is not installed.
    #[error("{category} font family '{family}' not found in the system font database")]
    FamilyNotFound {
        /// Requested family name.
        family: String,
        /// Category the family was requested for.
        category: FontCategory,
    },
}
