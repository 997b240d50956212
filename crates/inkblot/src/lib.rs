#![forbid(unsafe_code)]
//! inkblot: Deterministic, bilaterally symmetric inkblot rasters from Ethereum-style addresses.
//!
//! Modules:
//! - fingerprint: address features and the 32-bit seed
//! - random: seeded float stream driving every random decision of a run
//! - noise: seeded 3D gradient noise with a run-scoped cache
//! - sampling: mirrored rejection sampling (standard, inverted, star)
//! - color: color model, names, 10-stop ramps, scheme selection
//! - render: parameters, plotter, canvas, frame loop, ink effects
//!
//! The same address and parameters always produce the same bytes. Malformed addresses
//! still render, from a fallback fingerprint with a random seed.
pub mod color;
pub mod error;
pub mod fingerprint;
pub mod noise;
pub mod random;
pub mod render;
pub mod sampling;

pub use render::generate;

/// Convenient re-exports for common types. Import with `use inkblot::prelude::*;`.
pub mod prelude {
    pub use crate::color::{
        color_name, select_scheme, ColorRamp, ColorRelationship, ColorScheme, Hsl, RampLayout,
        Rgb,
    };
    pub use crate::error::{Error, Result};
    pub use crate::fingerprint::{extract, Fingerprint};
    pub use crate::noise::{GradientNoiseField, NoiseCache, PermutationTable};
    pub use crate::random::SeededRandom;
    pub use crate::render::{
        generate, Artwork, Canvas, EffectStats, FrameRenderer, Plotter, RenderParams,
        RenderStats, TraitAttribute,
    };
    pub use crate::sampling::{
        InvertedSampling, ParticlePattern, ParticleSampling, SamplingArea, StandardSampling,
        StarSampling, SymmetricPair,
    };
}
