//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glyphline_config::{FontCategory, ThemeConfig};
use glyphline_fonts::{ImagePen, LayoutResult, MeasureSink, TextEngine, TextStyle};
use image::{Rgba, RgbaImage};

use super::StyleArgs;

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output: PathBuf,
    pub color: Rgba<u8>,
    pub background: Option<Rgba<u8>>,
    pub padding: u32,
}

/// Load the theme from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    match path {
        Some(path) => ThemeConfig::load_from(path)
            .with_context(|| format!("failed to load theme config {}", path.display())),
        None => ThemeConfig::load().context("failed to load theme config"),
    }
}

/// Write the built-in default theme to `path`, or to the default location.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let target = path.map_or_else(ThemeConfig::config_path, Path::to_path_buf);
    if target.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", target.display());
    }
    let config = ThemeConfig::default();
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
    .with_context(|| format!("failed to write {}", target.display()))?;
    println!("Wrote default theme config to {}", target.display());
    Ok(())
}

/// Lay `text` out exactly as it will be drawn, without drawing it.
fn layout_text(engine: &TextEngine, text: &str, args: &StyleArgs) -> LayoutResult {
    engine.draw_string(&mut MeasureSink, text, &args.style(), args.size, args.scale)
}

pub fn measure(config: &ThemeConfig, text: &str, args: &StyleArgs) -> Result<()> {
    let engine = TextEngine::from_config(config);
    let result = layout_text(&engine, text, args);
    println!(
        "width={:.2} height={:.2} baseline={:.2}",
        result.width, result.height, result.baseline
    );
    Ok(())
}

pub fn render(config: &ThemeConfig, text: &str, args: &StyleArgs, options: &RenderOptions) -> Result<()> {
    let engine = TextEngine::from_config(config);
    let style = args.style();

    let measured = layout_text(&engine, text, args);
    let pad = options.padding;
    let width = measured.width.ceil() as u32 + 2 * pad;
    let height = measured.height.ceil() as u32 + 2 * pad;
    if width == 0 || height == 0 {
        bail!("nothing to render");
    }

    let mut image = match options.background {
        Some(bg) => RgbaImage::from_pixel(width, height, bg),
        None => RgbaImage::new(width, height),
    };
    let pen = ImagePen {
        origin: (pad as i32, pad as i32),
        color: options.color,
    };
    engine.draw_string_to_image(&mut image, pen, text, &style, args.size, args.scale);

    image
        .save(&options.output)
        .with_context(|| format!("failed to write {}", options.output.display()))?;
    println!("Wrote {}x{} image to {}", width, height, options.output.display());
    Ok(())
}

pub fn faces(config: &ThemeConfig) -> Result<()> {
    let engine = TextEngine::from_config(config);
    for category in FontCategory::ALL {
        let style = style_for(category);
        let set = engine.face_set(&style);
        let names: Vec<&str> = set.faces().iter().map(|face| face.name()).collect();
        println!("{:<12} {}", category.to_string(), names.join(" -> "));
    }
    Ok(())
}

pub fn check_config(config: &ThemeConfig) -> Result<()> {
    config.validate()?;
    let yaml = config
        .to_yaml_string()
        .context("failed to serialize theme config")?;
    print!("{yaml}");
    Ok(())
}

fn style_for(category: FontCategory) -> TextStyle {
    let style = TextStyle::regular();
    match category {
        FontCategory::Regular => style,
        FontCategory::Bold => style.with_bold(true),
        FontCategory::Italic => style.with_italic(true),
        FontCategory::BoldItalic => style.with_bold(true).with_italic(true),
        FontCategory::Monospace => style.with_monospace(true),
        FontCategory::Symbol => style.with_symbol(true),
    }
}

/// Parse `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
pub fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let hex = value.trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("invalid color '{value}', expected RRGGBB or RRGGBBAA");
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use glyphline_fonts::{
        FnSink, GlyphRunOutput, HarfBuzzShaper, LayoutOptions, SwashFaceProvider, ThemeFonts,
    };

    fn style_args(size: f32, scale: f32) -> StyleArgs {
        StyleArgs {
            size,
            scale,
            bold: false,
            italic: false,
            monospace: false,
            symbol: false,
            tab_width: 0,
        }
    }

    // Every category falls back to the built-in notdef face: 600 units per glyph
    fn notdef_engine() -> TextEngine {
        TextEngine::new(
            ThemeFonts::new(),
            Arc::new(SwashFaceProvider),
            Arc::new(HarfBuzzShaper::new()),
            LayoutOptions::default(),
        )
    }

    #[test]
    fn test_layout_text_matches_drawn_size() {
        let engine = notdef_engine();
        for scale in [1.0, 2.0] {
            let args = style_args(16.0, scale);
            let mut end = 0.0;
            let drawn = engine.draw_string(
                &mut FnSink(|run: &GlyphRunOutput, x: f32, _: f32| end = x + run.advance.to_f32()),
                "ab\tc",
                &args.style(),
                args.size,
                args.scale,
            );
            let measured = layout_text(&engine, "ab\tc", &args);
            assert_eq!(measured, drawn);
            assert_eq!(measured.width, end);
        }
    }

    #[test]
    fn test_layout_text_scales_with_device_scale() {
        let engine = notdef_engine();
        let one = layout_text(&engine, "ab", &style_args(16.0, 1.0));
        let two = layout_text(&engine, "ab", &style_args(16.0, 2.0));
        assert_eq!(one.width, 2.0 * 9.59375);
        assert_eq!(two.width, 2.0 * one.width);
    }

    #[test]
    fn test_init_config_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.yaml");
        init_config(Some(&path), false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), ThemeConfig::default());

        // refuses to clobber without --force
        std::fs::write(&path, "layout:\n  default_tab_width: 8\n").unwrap();
        assert!(init_config(Some(&path), false).is_err());
        assert_eq!(load_config(Some(&path)).unwrap().layout.default_tab_width, 8);
        init_config(Some(&path), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), ThemeConfig::default());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("ff8000").unwrap(), Rgba([255, 128, 0, 255]));
        assert_eq!(parse_color("#00000080").unwrap(), Rgba([0, 0, 0, 128]));
        assert!(parse_color("fff").is_err());
        assert!(parse_color("gg0000").is_err());
    }

    #[test]
    fn test_style_for_round_trips_category() {
        for category in FontCategory::ALL {
            assert_eq!(style_for(category).category(), category);
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "layout:\n  default_tab_width: 8\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout.default_tab_width, 8);
        assert!(load_config(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}
