//! Faces backed by swash: charmap lookup, metrics and rasterization.

use std::fmt;
use std::sync::Arc;

use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::{CacheKey, FontRef};

use super::{FaceMetrics, FaceProvider, FontFace, GlyphId, OpenTypeData, RasterizedGlyph};
use crate::error::FontError;
use crate::theme::FontResource;

/// An owned font face.
///
/// Keeps the font bytes alive together with the offset and cache key of the
/// face inside them, and rebuilds a borrowed [`FontRef`] on demand.
#[derive(Clone)]
pub struct SwashFace {
    name: String,
    data: Arc<[u8]>,
    index: u32,
    offset: u32,
    key: CacheKey,
}

impl fmt::Debug for SwashFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwashFace")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl SwashFace {
    /// Parse the face at `index` within `data`.
    ///
    /// `index` matters for TrueType Collection (.ttc) files where several
    /// faces share the same bytes.
    ///
    /// # Errors
    /// Returns [`FontError::Parse`] if the bytes are not a valid face.
    pub fn new_with_index(
        name: impl Into<String>,
        data: Arc<[u8]>,
        index: u32,
    ) -> Result<Self, FontError> {
        let name = name.into();
        let font = FontRef::from_index(&data, index as usize)
            .ok_or_else(|| FontError::Parse { name: name.clone() })?;
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            name,
            data,
            index,
            offset,
            key,
        })
    }

    /// Parse a theme resource.
    pub fn from_resource(resource: &FontResource) -> Result<Self, FontError> {
        Self::new_with_index(resource.name(), resource.bytes(), resource.index())
    }

    /// Borrowed swash view of this face.
    pub fn as_font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }
}

impl FontFace for SwashFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn nominal_glyph(&self, ch: char) -> Option<GlyphId> {
        let glyph = self.as_font_ref().charmap().map(ch);
        (glyph != 0).then_some(glyph)
    }

    fn metrics(&self) -> FaceMetrics {
        let metrics = self.as_font_ref().metrics(&[]);
        FaceMetrics {
            units_per_em: metrics.units_per_em,
            ascent: metrics.ascent,
            descent: metrics.descent,
            line_gap: metrics.leading,
        }
    }

    fn glyph_advance(&self, glyph: GlyphId) -> f32 {
        self.as_font_ref().glyph_metrics(&[]).advance_width(glyph)
    }

    fn opentype_data(&self) -> Option<OpenTypeData<'_>> {
        Some(OpenTypeData {
            bytes: &self.data,
            index: self.index,
        })
    }

    fn rasterize(&self, glyph: GlyphId, size_px: f32) -> Option<RasterizedGlyph> {
        let mut context = ScaleContext::new();
        let mut scaler = context
            .builder(self.as_font_ref())
            .size(size_px)
            .hint(true)
            .build();
        let image = Render::new(&[
            Source::ColorOutline(0),
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::Outline,
        ])
        .render(&mut scaler, glyph)?;

        let mut pixels = Vec::with_capacity(image.data.len() * 4);
        let is_colored = match image.content {
            Content::Color => {
                pixels.extend_from_slice(&image.data);
                true
            }
            Content::Mask => {
                for &mask in &image.data {
                    pixels.extend_from_slice(&[255, 255, 255, mask]);
                }
                false
            }
            _ => return None,
        };

        Some(RasterizedGlyph {
            width: image.placement.width,
            height: image.placement.height,
            left: image.placement.left,
            top: image.placement.top,
            pixels,
            is_colored,
        })
    }
}

/// The default [`FaceProvider`]: parses resources with swash.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwashFaceProvider;

impl FaceProvider for SwashFaceProvider {
    fn parse(&self, resource: &FontResource) -> Result<Arc<dyn FontFace>, FontError> {
        let face = SwashFace::from_resource(resource)?;
        log::debug!("Parsed font face '{}'", face.name());
        Ok(Arc::new(face))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_rejected() {
        let resource = FontResource::new("zeros.ttf", vec![0u8; 100]);
        let err = SwashFace::from_resource(&resource).unwrap_err();
        assert!(matches!(err, FontError::Parse { ref name } if name == "zeros.ttf"));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let resource = FontResource::new("empty.ttf", Vec::new());
        assert!(SwashFaceProvider.parse(&resource).is_err());
    }
}
