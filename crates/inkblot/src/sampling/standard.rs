//! Center-dense, horizontally elongated particle footprint.
use glam::DVec2;

use crate::sampling::{ParticleSampling, SamplingArea};

/// Acceptance `(1 - (0.7|dx| + 0.3|dy|))^4` with `dx`, `dy` normalized to `[-1, 1]`.
///
/// The horizontal offset weighs more than the vertical one, so density falls off
/// faster toward the sides than toward the top and bottom.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSampling;

impl ParticleSampling for StandardSampling {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn acceptance(&self, area: &SamplingArea, candidate: DVec2) -> f64 {
        let d = area.normalized_offset(candidate).abs();
        (1.0 - (0.7 * d.x + 0.3 * d.y)).max(0.0).powi(4)
    }
}
