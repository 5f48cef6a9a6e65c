//! Font loading from files and the system font database.

use std::fs;

use fontdb::{Database, Family, Query};
use glyphline_config::{FontCategory, FontSource};

use super::FontResource;
use crate::error::FontError;

/// Create a font database populated with the system's installed fonts.
pub fn system_font_database() -> Database {
    let mut db = Database::new();
    db.load_system_fonts();
    log::info!("Loaded {} system fonts", db.len());
    db
}

/// Read the bytes a [`FontSource`] points at.
///
/// Family lookups ask for the category's weight and style, so a bold category
/// naming "DejaVu Sans" gets the bold face of that family.
///
/// # Errors
/// [`FontError::Io`] for unreadable files, [`FontError::FamilyNotFound`] for
/// families the database does not know.
pub fn load_source(
    db: &Database,
    source: &FontSource,
    category: FontCategory,
) -> Result<FontResource, FontError> {
    log::debug!("Loading {} font from {}", category, source.label());
    match source {
        FontSource::Path { path } => {
            let bytes = fs::read(path).map_err(|source| FontError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(FontResource::new(path.display().to_string(), bytes))
        }
        FontSource::Family { family } => {
            load_family(db, family, category).ok_or_else(|| FontError::FamilyNotFound {
                family: family.clone(),
                category,
            })
        }
    }
}

fn load_family(db: &Database, family: &str, category: FontCategory) -> Option<FontResource> {
    let query = Query {
        families: &[Family::Name(family)],
        weight: if category.is_bold() {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        },
        style: if category.is_italic() {
            fontdb::Style::Italic
        } else {
            fontdb::Style::Normal
        },
        ..Query::default()
    };

    let id = db.query(&query)?;

    // Pass the face index through for TrueType Collection files where
    // several faces share the same data.
    db.with_face_data(id, |data, face_index| {
        FontResource::with_index(family, data.to_vec(), face_index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_family_in_empty_database() {
        let db = Database::new();
        let err = load_source(&db, &FontSource::family("No Such Font"), FontCategory::Bold)
            .unwrap_err();
        assert!(matches!(
            err,
            FontError::FamilyNotFound { ref family, category: FontCategory::Bold } if family == "No Such Font"
        ));
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let db = Database::new();
        let err = load_source(
            &db,
            &FontSource::path("/nonexistent/glyphline/font.ttf"),
            FontCategory::Regular,
        )
        .unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/glyphline/font.ttf"));
    }

    #[test]
    fn test_path_source_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.ttf");
        fs::write(&path, [1u8, 2, 3]).unwrap();

        let resource =
            load_source(&Database::new(), &FontSource::path(&path), FontCategory::Regular)
                .unwrap();
        assert_eq!(&*resource.bytes(), &[1u8, 2, 3]);
        assert_eq!(resource.index(), 0);
    }
}
