use image::RgbaImage;
use rayon::prelude::*;

use crate::blend::BlendMode;
use crate::compose::CompositeOp;
use crate::foundation::color::{Pixel, Rgb};
use crate::foundation::error::{DuffleError, DuffleResult};

/// Composites a source image over a backdrop, pixel for pixel.
///
/// A compositor is a plain value: pick the operator and optional blend mode
/// up front and reuse it across draws. The default composites source over
/// backdrop with no color mixing.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Compositor {
    /// Porter-Duff operator driving coverage and output alpha.
    #[serde(default)]
    pub op: CompositeOp,
    /// Optional blend mode mixing the colors before compositing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend: Option<BlendMode>,
}

impl Compositor {
    pub fn new(op: CompositeOp) -> Self {
        Self { op, blend: None }
    }

    pub fn with_blend(op: CompositeOp, blend: BlendMode) -> Self {
        Self {
            op,
            blend: Some(blend),
        }
    }

    /// Composite one source pixel over one backdrop pixel.
    ///
    /// When computed output alpha is zero the result is exactly
    /// [`Pixel::TRANSPARENT`]: a pixel nobody can see carries no color, and
    /// downstream passes never receive NaN or infinity.
    ///
    /// The blend-aware color path is defined relative to source-over
    /// compositing; with a non-`SrcOver` operator the selected factors still
    /// drive the output alpha. The combination is accepted but unusual.
    pub fn pixel(self, source: Pixel, backdrop: Pixel) -> Pixel {
        let sa = source.alpha;
        let ba = backdrop.alpha;
        let (fa, fb) = self.op.factors(sa, ba);
        let ao = sa * fa + ba * fb;
        if ao <= 0.0 {
            return Pixel::TRANSPARENT;
        }

        let (s, b) = (source.color, backdrop.color);
        let rgb = match self.blend {
            None => Rgb::new(
                (s.r * sa * fa + b.r * ba * fb) / ao,
                (s.g * sa * fa + b.g * ba * fb) / ao,
                (s.b * sa * fa + b.b * ba * fb) / ao,
            ),
            Some(mode) => {
                let m = mode.mix(b, s);
                let ch = |cs: f64, cb: f64, cm: f64| {
                    ((1.0 - ba) * sa * cs + ba * sa * cm + (1.0 - sa) * ba * cb) / ao
                };
                Rgb::new(ch(s.r, b.r, m.r), ch(s.g, b.g, m.g), ch(s.b, b.b, m.b))
            }
        };
        Pixel::new(rgb, ao)
    }

    /// Composite `source` over `backdrop` into a freshly allocated
    /// `width x height` buffer.
    ///
    /// Inputs are straight-alpha RGBA8. Coordinates outside either input
    /// read as fully transparent, so differently sized layers composite on
    /// the shared grid anchored at the origin. Rows are processed in
    /// parallel; per-pixel work is independent and the compositor is
    /// read-only during the loop.
    #[tracing::instrument(skip(source, backdrop))]
    pub fn draw(
        self,
        width: u32,
        height: u32,
        source: &RgbaImage,
        backdrop: &RgbaImage,
    ) -> DuffleResult<RgbaImage> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| DuffleError::validation("output buffer size overflow"))?;
        if len == 0 {
            return RgbaImage::from_raw(width, height, Vec::new())
                .ok_or_else(|| DuffleError::validation("output buffer does not match canvas"));
        }
        tracing::debug!(width, height, "compositing");

        let row_bytes = (width as usize) * 4;
        let mut buf = vec![0u8; len];
        buf.par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let s = pixel_at(source, x as u32, y as u32);
                    let b = pixel_at(backdrop, x as u32, y as u32);
                    px.copy_from_slice(&self.pixel(s, b).to_rgba8());
                }
            });

        RgbaImage::from_raw(width, height, buf)
            .ok_or_else(|| DuffleError::validation("output buffer does not match canvas"))
    }
}

fn pixel_at(img: &RgbaImage, x: u32, y: u32) -> Pixel {
    if x < img.width() && y < img.height() {
        Pixel::from_rgba8(img.get_pixel(x, y).0)
    } else {
        Pixel::TRANSPARENT
    }
}

#[cfg(test)]
#[path = "../tests/unit/draw.rs"]
mod tests;
