//! Floating-point RGB raster with fading and mirrored disc stamping.
use std::io::Cursor;

use glam::DVec2;
use image::{ImageFormat, RgbImage};

use crate::color::Rgb;
use crate::error::Result;

const CHANNELS: usize = 3;
const WHITE: f32 = 255.0;

/// Square RGB canvas with channels stored as `f32` in `[0, 255]`.
///
/// Every mutation is applied to a pixel and its mirror across the vertical center line in
/// the same way, so `pixel(x, y) == pixel(size - 1 - x, y)` holds exactly at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: u32,
    data: Vec<f32>,
}

impl Canvas {
    /// Opaque white canvas.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize * CHANNELS;
        Self {
            size,
            data: vec![WHITE; len],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Channels at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Wash the whole canvas with white at opacity `alpha / 255`.
    pub fn fade(&mut self, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let a = alpha as f32 / 255.0;
        for c in &mut self.data {
            *c += (WHITE - *c) * a;
        }
    }

    /// Draw an anti-aliased filled disc at `center` and at its mirror `(size - x, y)`.
    ///
    /// Both discs are composited as one stamp: a pixel's coverage combines its own disc
    /// coverage with that of its mirror pixel, `1 - (1 - a)(1 - b)`, so overlapping discs
    /// near the center line are not painted twice.
    pub fn stamp_mirrored_pair(&mut self, center: DVec2, radius: f64, color: Rgb) {
        if radius <= 0.0 || !center.is_finite() || self.size == 0 {
            return;
        }
        let last = self.size as i64 - 1;
        let reach = radius + 1.0;
        let y0 = ((center.y - reach).floor() as i64).max(0);
        let y1 = ((center.y + reach).ceil() as i64).min(last);
        let x0 = ((center.x - reach).floor() as i64).max(0);
        let x1 = ((center.x + reach).ceil() as i64).min(last);
        if y0 > y1 || x0 > x1 {
            return;
        }

        // Columns covered by the disc or its mirror, without visiting any column twice.
        let (m0, m1) = (last - x1, last - x0);
        let spans = if m0 <= x1 + 1 && x0 <= m1 + 1 {
            [(x0.min(m0), x1.max(m1)), (1, 0)]
        } else {
            [(x0, x1), (m0, m1)]
        };

        let target = [color.r as f32, color.g as f32, color.b as f32];
        for py in y0..=y1 {
            for &(a, b) in &spans {
                for px in a..=b {
                    let own = coverage(px, py, center, radius);
                    let mirrored = coverage(last - px, py, center, radius);
                    let cover = 1.0 - (1.0 - own) * (1.0 - mirrored);
                    if cover <= 0.0 {
                        continue;
                    }
                    let i = self.offset(px as u32, py as u32);
                    for (c, t) in self.data[i..i + CHANNELS].iter_mut().zip(target) {
                        *c += (t - *c) * cover;
                    }
                }
            }
        }
    }

    /// Lighten inked pixels (channel mean below `ink_threshold`) toward white by
    /// `lighten()`, one draw per pixel pair in row-major order over the left half.
    /// A pixel and its mirror receive the same amount. Returns the pairs touched.
    pub fn vary_ink_density(
        &mut self,
        ink_threshold: f32,
        mut lighten: impl FnMut() -> f32,
    ) -> u64 {
        let last = self.size.saturating_sub(1);
        let mut touched = 0;
        for y in 0..self.size {
            for x in 0..self.size.div_ceil(2) {
                let [r, g, b] = self.pixel(x, y);
                if (r + g + b) / 3.0 >= ink_threshold {
                    continue;
                }
                let amount = lighten().clamp(0.0, 1.0);
                self.lighten(x, y, amount);
                if last - x != x {
                    self.lighten(last - x, y, amount);
                }
                touched += 1;
            }
        }
        touched
    }

    /// Whether every row reads the same from both ends.
    pub fn is_mirror_symmetric(&self) -> bool {
        let last = self.size.saturating_sub(1);
        (0..self.size).all(|y| {
            (0..self.size / 2).all(|x| self.pixel(x, y) == self.pixel(last - x, y))
        })
    }

    /// Quantize to 8-bit RGB.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.size, self.size, |x, y| {
            image::Rgb(self.pixel(x, y).map(|c| c.round().clamp(0.0, 255.0) as u8))
        })
    }

    /// Quantize and encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.to_image())
    }

    fn lighten(&mut self, x: u32, y: u32, amount: f32) {
        let i = self.offset(x, y);
        for c in &mut self.data[i..i + CHANNELS] {
            *c += (WHITE - *c) * amount;
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size as usize + x as usize) * CHANNELS
    }
}

/// Encode `image` as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Disc coverage of the pixel whose center is `(px + 0.5, py + 0.5)`.
#[inline]
fn coverage(px: i64, py: i64, center: DVec2, radius: f64) -> f32 {
    let p = DVec2::new(px as f64 + 0.5, py as f64 + 0.5);
    (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0) as f32
}
