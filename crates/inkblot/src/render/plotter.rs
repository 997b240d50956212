//! Noise value to particle color and radius.
use std::f64::consts::PI;

use crate::color::{ColorRamp, Rgb};

/// Exponent applied to noise values before the ramp lookup; favors earlier stops.
pub const VALUE_EXPONENT: f64 = 1.5;

/// Share of the triangular radius profile kept when the sine texture is blended in.
const TEXTURE_BLEND: f64 = 0.7;

/// Color and radius for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub color: Rgb,
    pub radius: f64,
}

/// Maps noise values onto a ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plotter {
    /// Blend `sin(4πt)²` into the radius profile.
    pub radius_texture: bool,
}

impl Default for Plotter {
    fn default() -> Self {
        Self {
            radius_texture: true,
        }
    }
}

impl Plotter {
    pub fn new(radius_texture: bool) -> Self {
        Self { radius_texture }
    }

    /// Plot `value` (clamped to `[0, 1]`) against `ramp`.
    ///
    /// The value selects a stop; the position inside the stop's band shapes the radius,
    /// peaking at the band middle and vanishing at its edges.
    pub fn plot(&self, value: f64, ramp: &ColorRamp, max_radius: f64) -> Plot {
        let mapped = value.clamp(0.0, 1.0).powf(VALUE_EXPONENT);
        let scaled = mapped * ramp.len() as f64;
        let index = (scaled.floor() as usize).min(ramp.len() - 1);
        let t = scaled.fract();

        Plot {
            color: ramp.get(index),
            radius: max_radius * self.radius_scale(t),
        }
    }

    /// Radius factor in `[0, 1]` for band position `t`.
    pub fn radius_scale(&self, t: f64) -> f64 {
        let triangle = 2.0 * (0.5 - (t - 0.5).abs());
        if self.radius_texture {
            let wave = (t * 4.0 * PI).sin();
            TEXTURE_BLEND * triangle + (1.0 - TEXTURE_BLEND) * wave * wave
        } else {
            triangle
        }
    }
}
