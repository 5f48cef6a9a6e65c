//! Face set resolution, fallback and invalidation.

mod common;

use std::sync::Arc;

use common::{LATIN, engine_with, full_theme, resource};
use glyphline_config::FontCategory;
use glyphline_fonts::{TextStyle, ThemeFonts};

fn names(engine: &glyphline_fonts::TextEngine, style: &TextStyle) -> Vec<String> {
    engine
        .face_set(style)
        .faces()
        .iter()
        .map(|face| face.name().to_string())
        .collect()
}

#[test]
fn test_every_style_resolves_non_empty() {
    let (engine, _) = engine_with(full_theme());
    for bits in 0..16u8 {
        let style = TextStyle::regular()
            .with_bold(bits & 1 != 0)
            .with_italic(bits & 2 != 0)
            .with_monospace(bits & 4 != 0)
            .with_symbol(bits & 8 != 0);
        let set = engine.face_set(&style);
        assert_eq!(set.faces().len(), 3, "{style:?}");
        let expected = style.category().to_string().replace(' ', "-");
        assert_eq!(set.primary().name(), expected);
    }
}

#[test]
fn test_face_order_primary_default_emoji() {
    let (engine, _) = engine_with(full_theme());
    assert_eq!(
        names(&engine, &TextStyle::regular().with_italic(true)),
        vec!["italic", "italic-default", "emoji-tall"]
    );
}

#[test]
fn test_monospace_beats_bold() {
    let (engine, _) = engine_with(full_theme());
    let style = TextStyle::regular().with_monospace(true).with_bold(true);
    assert_eq!(engine.face_set(&style).primary().name(), "monospace");
}

#[test]
fn test_failed_primary_falls_back_to_default() {
    let theme = ThemeFonts::new()
        .with_primary(FontCategory::Bold, resource("bold", "!broken"))
        .with_default(FontCategory::Bold, resource("bold-default", LATIN));
    let (engine, _) = engine_with(theme);
    assert_eq!(
        names(&engine, &TextStyle::regular().with_bold(true)),
        vec!["bold-default"]
    );
}

#[test]
fn test_missing_primary_falls_back_to_default() {
    let theme = ThemeFonts::new().with_default(FontCategory::Regular, resource("regular-default", LATIN));
    let (engine, _) = engine_with(theme);
    assert_eq!(names(&engine, &TextStyle::regular()), vec!["regular-default"]);
}

#[test]
fn test_double_failure_uses_builtin_notdef() {
    let theme = ThemeFonts::new()
        .with_primary(FontCategory::Regular, resource("regular", "!"))
        .with_default(FontCategory::Regular, resource("regular-default", "!"))
        .with_emoji(resource("emoji", "\u{1F600}"));
    let (engine, _) = engine_with(theme);
    assert_eq!(
        names(&engine, &TextStyle::regular()),
        vec!["builtin-notdef", "emoji"]
    );
    // still measurable
    let (size, baseline) = engine.rendered_text_size("abc", 20.0, &TextStyle::regular());
    assert!(size.width > 0.0);
    assert!(baseline > 0.0);
}

#[test]
fn test_empty_theme_still_resolves() {
    let (engine, _) = engine_with(ThemeFonts::new());
    let set = engine.face_set(&TextStyle::regular().with_symbol(true));
    assert_eq!(set.faces().len(), 1);
    assert_eq!(set.primary().name(), "builtin-notdef");
}

#[test]
fn test_resolution_is_cached() {
    let (engine, provider) = engine_with(full_theme());
    let style = TextStyle::regular();
    let first = engine.face_set(&style);
    let parses = provider.parses();
    let second = engine.face_set(&style);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(provider.parses(), parses);
}

#[test]
fn test_tab_width_is_part_of_the_key() {
    let (engine, _) = engine_with(full_theme());
    engine.face_set(&TextStyle::regular());
    engine.face_set(&TextStyle::regular().with_tab_width(8));
    assert_eq!(engine.resolver().cached_len(), 2);
}

#[test]
fn test_invalidate_recomputes_face_set() {
    let (engine, provider) = engine_with(full_theme());
    let style = TextStyle::regular().with_bold(true);
    let before = engine.face_set(&style);
    let parses = provider.parses();

    engine.invalidate();
    let after = engine.face_set(&style);

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(provider.parses(), parses * 2);
}

#[test]
fn test_reload_theme_switches_faces() {
    let (engine, _) = engine_with(full_theme());
    let style = TextStyle::regular();
    assert_eq!(engine.face_set(&style).primary().name(), "regular");
    engine.rendered_text_size("abc", 20.0, &style);

    engine.reload_theme(
        ThemeFonts::new().with_primary(FontCategory::Regular, resource("replacement", LATIN)),
    );
    assert!(engine.metrics().is_empty());
    assert_eq!(names(&engine, &style), vec!["replacement"]);
}
