//! Turning a fingerprint into pixels.
//!
//! - [`RenderParams`]: validated parameter bundle.
//! - [`Plotter`]: noise value to ramp color and particle radius.
//! - [`Canvas`]: mirror-symmetric float raster with fade and disc stamping.
//! - [`effects`]: optional spots, drips and ink density pass.
//! - [`FrameRenderer`]: the frame loop producing an [`Artwork`].
pub mod canvas;
pub mod effects;
pub mod params;
pub mod plotter;
pub mod renderer;

pub use canvas::{encode_png, Canvas};
pub use effects::EffectStats;
pub use params::RenderParams;
pub use plotter::{Plot, Plotter};
pub use renderer::{edge_falloff, generate, Artwork, FrameRenderer, RenderStats, TraitAttribute};
