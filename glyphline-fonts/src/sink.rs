//! Destinations for laid-out glyph runs.
//!
//! Drawing and measuring run the same layout; only the sink differs. A
//! [`MeasureSink`] ignores every run, an [`ImageSink`] rasterizes runs into an
//! RGBA image, and an [`FnSink`] hands them to a closure.

use image::{Pixel, Rgba, RgbaImage};

use crate::face::RasterizedGlyph;
use crate::text_shaper::GlyphRunOutput;

/// Receives each shaped run with its pen position.
///
/// `x` is the run's left edge and `y` its baseline, both in pixels relative to
/// the origin of the string.
pub trait GlyphSink {
    fn accept(&mut self, run: &GlyphRunOutput, x: f32, y: f32);
}

/// Discards every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureSink;

impl GlyphSink for MeasureSink {
    fn accept(&mut self, _run: &GlyphRunOutput, _x: f32, _y: f32) {}
}

/// Forwards every run to a closure.
pub struct FnSink<F>(pub F);

impl<F> GlyphSink for FnSink<F>
where
    F: FnMut(&GlyphRunOutput, f32, f32),
{
    fn accept(&mut self, run: &GlyphRunOutput, x: f32, y: f32) {
        (self.0)(run, x, y)
    }
}

/// Where and in which color an [`ImageSink`] paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePen {
    /// Pixel position of the string's top-left corner in the image.
    pub origin: (i32, i32),
    /// Tint for mask glyphs. Color glyphs keep their own colors but take this
    /// alpha.
    pub color: Rgba<u8>,
}

impl Default for ImagePen {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            color: Rgba([0, 0, 0, 255]),
        }
    }
}

/// Rasterizes runs into an [`RgbaImage`], clipping at the image bounds.
pub struct ImageSink<'a> {
    target: &'a mut RgbaImage,
    pen: ImagePen,
}

impl<'a> ImageSink<'a> {
    pub fn new(target: &'a mut RgbaImage, pen: ImagePen) -> Self {
        Self { target, pen }
    }

    fn blit(&mut self, glyph: &RasterizedGlyph, left: i32, top: i32) {
        let (img_w, img_h) = (self.target.width() as i32, self.target.height() as i32);
        let tint = self.pen.color.0;

        for gy in 0..glyph.height as i32 {
            let ty = top + gy;
            if ty < 0 || ty >= img_h {
                continue;
            }
            for gx in 0..glyph.width as i32 {
                let tx = left + gx;
                if tx < 0 || tx >= img_w {
                    continue;
                }
                let i = ((gy as u32 * glyph.width + gx as u32) * 4) as usize;
                let Some(px) = glyph.pixels.get(i..i + 4) else {
                    return;
                };
                let src = if glyph.is_colored {
                    [px[0], px[1], px[2], mul_u8(px[3], tint[3])]
                } else {
                    [tint[0], tint[1], tint[2], mul_u8(px[3], tint[3])]
                };
                if src[3] == 0 {
                    continue;
                }
                let dst = self.target.get_pixel_mut(tx as u32, ty as u32);
                dst.blend(&Rgba(src));
            }
        }
    }
}

impl GlyphSink for ImageSink<'_> {
    fn accept(&mut self, run: &GlyphRunOutput, x: f32, y: f32) {
        let size_px = run.size.to_f32();
        let (ox, oy) = self.pen.origin;
        let mut pen_x = x;
        let mut pen_y = y;

        for glyph in &run.glyphs {
            if let Some(bitmap) = run.face.rasterize(glyph.glyph_id, size_px)
                && bitmap.width > 0
                && bitmap.height > 0
            {
                let left = ox + (pen_x + glyph.x_offset.to_f32()).round() as i32 + bitmap.left;
                let top = oy + (pen_y - glyph.y_offset.to_f32()).round() as i32 - bitmap.top;
                self.blit(&bitmap, left, top);
            }
            pen_x += glyph.x_advance.to_f32();
            pen_y -= glyph.y_advance.to_f32();
        }
    }
}

fn mul_u8(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}
