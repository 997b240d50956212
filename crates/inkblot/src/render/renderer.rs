//! Frame loop turning a fingerprint into a finished raster.
use std::f64::consts::PI;

use image::RgbImage;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::color::{select_scheme, ColorScheme};
use crate::error::Result;
use crate::fingerprint::{extract, Fingerprint};
use crate::noise::{CacheStats, GradientNoiseField};
use crate::random::SeededRandom;
use crate::render::canvas::{encode_png, Canvas};
use crate::render::effects::{self, EffectStats};
use crate::render::params::RenderParams;
use crate::render::plotter::Plotter;
use crate::sampling::{ParticlePattern, SamplerStats, SamplingArea};

/// Smallest particle radius as a fraction of `max_radius`.
pub const MIN_RADIUS_FRACTION: f64 = 0.1;

/// Counters collected over one render.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub frames: u32,
    /// Mirrored pairs stamped.
    pub particles: u64,
    pub sampler: SamplerStats,
    pub noise_cache: CacheStats,
    /// Zero unless `ink_effects` is set.
    pub effects: EffectStats,
}

/// A `trait_type` / `value` pair describing one artwork property.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: String,
}

impl TraitAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl ToString) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.to_string(),
        }
    }
}

/// Rendered raster plus everything that was derived to produce it.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Artwork {
    pub image: RgbImage,
    /// PNG encoding of `image`.
    pub png: Vec<u8>,
    pub fingerprint: Fingerprint,
    pub scheme: ColorScheme,
    pub pattern: ParticlePattern,
    pub stats: RenderStats,
}

impl Artwork {
    /// Palette and pattern summary for metadata consumers.
    pub fn traits(&self) -> Vec<TraitAttribute> {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        let mut traits = vec![
            TraitAttribute::new("Pattern", capitalize(self.pattern.name())),
            TraitAttribute::new("Color Scheme", &self.scheme.scheme_name),
            TraitAttribute::new("Primary Color", &self.scheme.primary_name),
            TraitAttribute::new("Secondary Color", &self.scheme.secondary_name),
            TraitAttribute::new("Primary Hex", self.scheme.primary),
            TraitAttribute::new("Secondary Hex", self.scheme.secondary),
            TraitAttribute::new("Diversity", format!("{:.2}", self.fingerprint.diversity)),
            TraitAttribute::new("Palindrome", yes_no(self.fingerprint.is_palindrome)),
            TraitAttribute::new("Less Unique", yes_no(self.fingerprint.is_less_unique)),
        ];
        if self.fingerprint.contains_420() {
            traits.push(TraitAttribute::new("Special", "420"));
        }
        traits
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders fingerprints with a fixed parameter bundle.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    params: RenderParams,
    plotter: Plotter,
}

impl FrameRenderer {
    /// Validates `params` and builds a renderer.
    pub fn try_new(params: RenderParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::build(params))
    }

    pub fn new(params: RenderParams) -> Self {
        debug_assert!(params.validate().is_ok(), "invalid render params");
        Self::build(params)
    }

    fn build(params: RenderParams) -> Self {
        Self {
            plotter: Plotter::new(params.radius_texture),
            params,
        }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Render `fingerprint` into an encoded artwork.
    ///
    /// Identical fingerprints and parameters give byte-identical rasters. Frames run in
    /// order; each starts with a white wash over the accumulated canvas. With
    /// `ink_effects` set, spots and drips are drawn from the same random stream after the
    /// last frame.
    pub fn render(&self, fingerprint: &Fingerprint) -> Result<Artwork> {
        let (canvas, scheme, pattern, stats) = self.render_canvas(fingerprint);
        let image = canvas.to_image();
        let png = encode_png(&image)?;

        info!(
            "Rendered '{}': {} pairs over {} frames, {} bytes.",
            fingerprint.address,
            stats.particles,
            stats.frames,
            png.len()
        );

        Ok(Artwork {
            image,
            png,
            fingerprint: fingerprint.clone(),
            scheme,
            pattern,
            stats,
        })
    }

    /// Run the frame loop without encoding.
    pub fn render_canvas(
        &self,
        fingerprint: &Fingerprint,
    ) -> (Canvas, ColorScheme, ParticlePattern, RenderStats) {
        let p = &self.params;
        let pattern = ParticlePattern::select(fingerprint);
        let scheme = select_scheme(fingerprint);

        info!(
            "Rendering '{}' | seed: {:#010x} | pattern: {} | scheme: {} ({} / {}) | {}px, {} frames x {} particles.",
            fingerprint.address,
            fingerprint.seed,
            pattern,
            scheme.scheme_name,
            scheme.primary_name,
            scheme.secondary_name,
            p.size,
            p.frames_to_render,
            p.particle_count
        );

        let mut rng = SeededRandom::new(fingerprint.seed);
        let mut noise = GradientNoiseField::from_random(&mut rng);
        let sampler = pattern.sampler();
        let size = p.size as f64;
        let area = SamplingArea::new(size, p.horizontal_margin, p.vertical_margin);
        let half = size * 0.5;

        let mut canvas = Canvas::new(p.size);
        let mut stats = RenderStats::default();

        for frame in 0..p.frames_to_render {
            canvas.fade(p.fade_alpha);
            let z = frame as f64 * p.speed;

            for _ in 0..p.particle_count {
                let pair = sampler.sample(&mut rng, &area);
                stats.sampler.record(&pair);

                let d = pair.original.distance(area.center) / half;
                let value = noise.fractal(
                    pair.original.x * p.scale,
                    pair.original.y * p.scale,
                    z,
                    p.octaves,
                    p.persistence,
                    p.lacunarity,
                ) * (1.0 - d * 0.5);

                let plot = self
                    .plotter
                    .plot(value.clamp(0.0, 1.0), &scheme.ramp, p.max_radius);
                let radius = edge_falloff(plot.radius, d, p.max_radius);
                canvas.stamp_mirrored_pair(pair.original, radius, plot.color);
                stats.particles += 1;
            }
            stats.frames += 1;
        }

        if p.ink_effects {
            stats.effects = effects::apply(&mut canvas, &mut rng, &area, scheme.primary);
            debug!(
                "Ink effects: {} spots, {} drips ({} steps), {} textured pairs.",
                stats.effects.spots,
                stats.effects.drips,
                stats.effects.drip_steps,
                stats.effects.textured
            );
        }

        stats.noise_cache = noise.cache_stats();
        debug!(
            "Sampler '{}': {:.2} attempts/pair, {} forced of {}.",
            sampler.name(),
            stats.sampler.mean_attempts(),
            stats.sampler.forced,
            stats.sampler.samples
        );
        debug!(
            "Noise cache: {} hits, {} misses, {} entries.",
            stats.noise_cache.hits,
            stats.noise_cache.misses,
            noise.cache_len()
        );

        (canvas, scheme, pattern, stats)
    }
}

/// Organic edge falloff: particles shrink toward the rim with a radial ripple, but never
/// below [`MIN_RADIUS_FRACTION`] of `max_radius`.
pub fn edge_falloff(radius: f64, distance: f64, max_radius: f64) -> f64 {
    let ripple = (distance * 8.0 * PI).sin();
    let shaped = radius * (1.0 - distance * distance * 0.8) * (0.6 + 0.4 * ripple * ripple);
    shaped.max(max_radius * MIN_RADIUS_FRACTION)
}

/// Extract, render, and encode `address` with `params`.
pub fn generate(address: &str, params: &RenderParams) -> Result<Artwork> {
    let renderer = FrameRenderer::try_new(params.clone())?;
    renderer.render(&extract(address))
}
