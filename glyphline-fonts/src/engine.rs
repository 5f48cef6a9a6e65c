//! Draw and measure entry points.

use std::sync::Arc;

use glyphline_config::ThemeConfig;
use image::RgbaImage;

use crate::face::{FaceProvider, SwashFaceProvider};
use crate::face_set::{FaceSet, FaceSetResolver};
use crate::layout::{LayoutOptions, LayoutResult, Size, TextLayout, TextParams};
use crate::metrics_cache::{MetricsCache, TextMetrics};
use crate::sink::{GlyphSink, ImagePen, ImageSink, MeasureSink};
use crate::style::TextStyle;
use crate::text_shaper::{HarfBuzzShaper, Shaper};
use crate::theme::{ThemeFonts, system_font_database};

/// The text pipeline: face resolution, shaping, layout and both caches.
///
/// Shared freely between threads; every method takes `&self`.
pub struct TextEngine {
    resolver: FaceSetResolver,
    metrics: MetricsCache,
    shaper: Arc<dyn Shaper>,
    options: LayoutOptions,
}

impl TextEngine {
    pub fn new(
        theme: ThemeFonts,
        provider: Arc<dyn FaceProvider>,
        shaper: Arc<dyn Shaper>,
        options: LayoutOptions,
    ) -> Self {
        Self {
            resolver: FaceSetResolver::new(theme, provider),
            metrics: MetricsCache::new(),
            shaper,
            options,
        }
    }

    /// Build an engine from a theme config, reading fonts from disk and the
    /// system font database.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let db = system_font_database();
        let theme = ThemeFonts::from_config(config, &db);
        Self::new(
            theme,
            Arc::new(SwashFaceProvider),
            Arc::new(HarfBuzzShaper::new()),
            LayoutOptions::from(&config.layout),
        )
    }

    /// The face set for `style`.
    pub fn face_set(&self, style: &TextStyle) -> Arc<FaceSet> {
        self.resolver.resolve(style)
    }

    /// Lay out `text` at `size * scale` pixels and pass each run to `sink`.
    ///
    /// A string consisting of exactly one space draws nothing.
    pub fn draw_string(
        &self,
        sink: &mut dyn GlyphSink,
        text: &str,
        style: &TextStyle,
        size: f32,
        scale: f32,
    ) -> LayoutResult {
        if text == " " {
            return LayoutResult::default();
        }
        let faces = self.face_set(style);
        let params = TextParams::new(size, scale, style.tab_width);
        TextLayout::new(&faces, self.shaper.as_ref(), &self.options, params).process_string(text, sink)
    }

    /// Draw `text` into an RGBA image with its top-left corner at `pen.origin`.
    pub fn draw_string_to_image(
        &self,
        image: &mut RgbaImage,
        pen: ImagePen,
        text: &str,
        style: &TextStyle,
        size: f32,
        scale: f32,
    ) -> LayoutResult {
        let mut sink = ImageSink::new(image, pen);
        self.draw_string(&mut sink, text, style, size, scale)
    }

    /// Measure `text` with an explicit face set at scale 1.
    pub fn measure_string(
        &self,
        faces: &FaceSet,
        text: &str,
        size: f32,
        tab_width: i32,
    ) -> LayoutResult {
        if text == " " {
            return LayoutResult::default();
        }
        let params = TextParams::new(size, 1.0, tab_width);
        TextLayout::new(faces, self.shaper.as_ref(), &self.options, params)
            .process_string(text, &mut MeasureSink)
    }

    /// Size and baseline of `text` in `style`, cached per `(text, size, style)`.
    pub fn rendered_text_size(&self, text: &str, size: f32, style: &TextStyle) -> (Size, f32) {
        if text == " " {
            return (Size::default(), 0.0);
        }
        if let Some(hit) = self.metrics.get(text, size, style) {
            return (hit.size, hit.baseline);
        }

        // Read before the face set so a measurement made with faces from
        // before an invalidation is never cached
        let generation = self.metrics.generation();
        let faces = self.face_set(style);
        let result = self.measure_string(&faces, text, size, style.tab_width);
        let metrics = TextMetrics {
            size: result.size(),
            baseline: result.baseline,
        };
        if self.metrics.put_if_current(generation, text, size, style, metrics) {
            log::trace!("Measured {:?} at {size}: {:?}", text, metrics);
        } else {
            log::debug!("Discarding measurement of {:?} taken before an invalidation", text);
        }
        (metrics.size, metrics.baseline)
    }

    /// Drop every cached face set and measurement.
    pub fn invalidate(&self) {
        self.resolver.clear();
        self.metrics.clear();
    }

    /// Switch to a new theme; everything cached under the old one is dropped.
    pub fn reload_theme(&self, theme: ThemeFonts) {
        log::info!("Reloading font theme");
        self.resolver.set_theme(theme);
        self.metrics.clear();
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn resolver(&self) -> &FaceSetResolver {
        &self.resolver
    }

    pub fn metrics(&self) -> &MetricsCache {
        &self.metrics
    }
}
