//! Round particle footprint with an organic edge.
use glam::DVec2;

use crate::sampling::{ParticleSampling, SamplingArea};

/// Acceptance `0.7(1 - r)^4 + 0.3(1 - r^2)^2`, `r` the radial distance over the smaller
/// half-extent.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertedSampling;

impl ParticleSampling for InvertedSampling {
    fn name(&self) -> &'static str {
        "inverted"
    }

    fn acceptance(&self, area: &SamplingArea, candidate: DVec2) -> f64 {
        let r = area.radial_distance(candidate);
        0.7 * (1.0 - r).powi(4) + 0.3 * (1.0 - r * r).powi(2)
    }
}
