//! Render parameter bundle.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

/// Largest accepted canvas edge in pixels.
pub const MAX_SIZE: u32 = 8192;
/// Largest accepted number of noise octaves.
pub const MAX_OCTAVES: u32 = 8;

/// Immutable configuration for one render.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderParams {
    /// Canvas edge length in pixels.
    pub size: u32,
    /// Mirrored particle pairs drawn per frame.
    pub particle_count: u32,
    /// Frames accumulated into the final raster.
    pub frames_to_render: u32,
    /// Noise step along the time axis per frame.
    pub speed: f64,
    /// Noise step per pixel.
    pub scale: f64,
    /// Largest particle radius in pixels.
    pub max_radius: f64,
    /// Opacity of the white wash applied before each frame.
    pub fade_alpha: u8,
    /// Left and right margin as a fraction of `size`, in `[0, 0.5)`.
    pub horizontal_margin: f64,
    /// Top and bottom margin as a fraction of `size`, in `[0, 0.5)`.
    pub vertical_margin: f64,
    /// Blend a sine texture into particle radii.
    pub radius_texture: bool,
    /// Scatter spots and drips and vary ink density after the last frame.
    pub ink_effects: bool,
    /// Noise octaves; `1` is plain single-octave noise.
    pub octaves: u32,
    /// Amplitude falloff between octaves.
    pub persistence: f64,
    /// Frequency growth between octaves.
    pub lacunarity: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            size: 1024,
            particle_count: 600,
            frames_to_render: 60,
            speed: 0.01,
            scale: 0.005,
            max_radius: 14.0,
            fade_alpha: 6,
            horizontal_margin: 0.1,
            vertical_margin: 0.1,
            radius_texture: true,
            ink_effects: false,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl RenderParams {
    /// Creates a new [`RenderParams`] for a `size` canvas with default settings.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_particle_count(mut self, particle_count: u32) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_frames_to_render(mut self, frames_to_render: u32) -> Self {
        self.frames_to_render = frames_to_render;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    pub fn with_fade_alpha(mut self, fade_alpha: u8) -> Self {
        self.fade_alpha = fade_alpha;
        self
    }

    /// Sets both margins, as fractions of the canvas size.
    pub fn with_margins(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_margin = horizontal;
        self.vertical_margin = vertical;
        self
    }

    pub fn with_radius_texture(mut self, radius_texture: bool) -> Self {
        self.radius_texture = radius_texture;
        self
    }

    pub fn with_ink_effects(mut self, ink_effects: bool) -> Self {
        self.ink_effects = ink_effects;
        self
    }

    /// Sets the fractal noise parameters.
    pub fn with_octaves(mut self, octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        self.octaves = octaves;
        self.persistence = persistence;
        self.lacunarity = lacunarity;
        self
    }

    /// Copy of these parameters adjusted by address features.
    ///
    /// Diversity sets the spatial scale, zeros add octaves, ones raise persistence,
    /// letters stretch lacunarity, high nibbles widen particles, and even nibbles add
    /// particles. Canvas size, frame count and margins are left alone.
    pub fn tuned_for(&self, fingerprint: &Fingerprint) -> Self {
        let zero_factor = (fingerprint.zero_ratio * 2.0).min(1.0);
        let one_factor = (fingerprint.one_ratio * 2.0).min(1.0);
        let particles =
            (self.particle_count as f64 * (0.9 + fingerprint.even_ratio * 0.2)).round() as u32;

        Self {
            scale: self.scale * (0.6 + fingerprint.diversity * 0.8),
            octaves: 1 + (zero_factor * 3.0) as u32,
            persistence: 0.4 + one_factor * 0.3,
            lacunarity: 1.8 + fingerprint.letter_ratio * 0.4,
            max_radius: self.max_radius * (0.9 + fingerprint.high_value_ratio * 0.4),
            particle_count: particles.max(1),
            ..self.clone()
        }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(Error::InvalidConfig(format!(
                "size must be in 1..={MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.particle_count == 0 {
            return Err(Error::InvalidConfig("particle_count must be > 0".into()));
        }
        if self.frames_to_render == 0 {
            return Err(Error::InvalidConfig("frames_to_render must be > 0".into()));
        }
        if !self.speed.is_finite() {
            return Err(Error::InvalidConfig("speed must be finite".into()));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::InvalidConfig("scale must be finite and > 0".into()));
        }
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(Error::InvalidConfig(
                "max_radius must be finite and > 0".into(),
            ));
        }
        for (name, margin) in [
            ("horizontal_margin", self.horizontal_margin),
            ("vertical_margin", self.vertical_margin),
        ] {
            if !(0.0..0.5).contains(&margin) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be in [0, 0.5), got {margin}"
                )));
            }
        }
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(Error::InvalidConfig(format!(
                "octaves must be in 1..={MAX_OCTAVES}"
            )));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(Error::InvalidConfig(
                "persistence must be finite and > 0".into(),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity >= 1.0) {
            return Err(Error::InvalidConfig(
                "lacunarity must be finite and >= 1".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::extract;

    #[test]
    fn defaults_are_valid() {
        let params = RenderParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.size, 1024);
        assert_eq!(params.octaves, 1);
        assert!(!params.ink_effects);
        assert!(params.clone().with_ink_effects(true).validate().is_ok());
        assert_eq!(RenderParams::new(256).size, 256);
    }

    #[test]
    fn rejects_degenerate_values() {
        let cases = [
            RenderParams::new(0),
            RenderParams::new(MAX_SIZE + 1),
            RenderParams::default().with_particle_count(0),
            RenderParams::default().with_frames_to_render(0),
            RenderParams::default().with_speed(f64::NAN),
            RenderParams::default().with_scale(0.0),
            RenderParams::default().with_max_radius(-1.0),
            RenderParams::default().with_margins(0.5, 0.1),
            RenderParams::default().with_margins(0.1, -0.1),
            RenderParams::default().with_octaves(0, 0.5, 2.0),
            RenderParams::default().with_octaves(9, 0.5, 2.0),
            RenderParams::default().with_octaves(3, 0.0, 2.0),
            RenderParams::default().with_octaves(3, 0.5, 0.5),
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(Error::InvalidConfig(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn margin_nan_is_rejected() {
        let params = RenderParams::default().with_margins(f64::NAN, 0.1);
        assert!(params.validate().is_err());
    }

    #[test]
    fn tuning_is_deterministic_and_valid() {
        let base = RenderParams::new(512);
        for addr in [
            "0x0000000000000000000000000000000000000000",
            "0xabcdef0123456789abcdef0123456789abcdef01",
            "0x1111111111111111111111111111111111111111",
        ] {
            let fp = extract(addr);
            let tuned = base.tuned_for(&fp);
            assert_eq!(tuned, base.tuned_for(&fp));
            assert!(tuned.validate().is_ok(), "{addr}: {tuned:?}");
            assert_eq!(tuned.size, 512);
            assert_eq!(tuned.frames_to_render, base.frames_to_render);
        }
    }

    #[test]
    fn tuning_maps_features_to_noise_shape() {
        let base = RenderParams::default();
        let zeros = base.tuned_for(&extract("0x0000000000000000000000000000000000000000"));
        assert_eq!(zeros.octaves, 4);
        assert_eq!(zeros.persistence, 0.4);
        assert_eq!(zeros.lacunarity, 1.8);
        assert_eq!(zeros.particle_count, 660);

        let ones = base.tuned_for(&extract("0x1111111111111111111111111111111111111111"));
        assert_eq!(ones.octaves, 1);
        assert!((ones.persistence - 0.7).abs() < 1e-12);
        assert_eq!(ones.particle_count, 540);
    }
}
