//! Leaf/petal particle footprint.
use glam::DVec2;

use crate::sampling::{ParticleSampling, SamplingArea};

/// Acceptance
/// `0.5(1 - r)^3 + 0.4(0.7 sin^2(3.5θ) + 0.3 sin^2(7θ)) + 0.1 sin(1.75θ) * 0.2`,
/// clamped to `[0, 1]`, with `θ` the angle around the canvas center.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarSampling;

impl ParticleSampling for StarSampling {
    fn name(&self) -> &'static str {
        "star"
    }

    fn acceptance(&self, area: &SamplingArea, candidate: DVec2) -> f64 {
        let r = area.radial_distance(candidate);
        let theta = area.angle(candidate);
        let petals = 0.7 * (3.5 * theta).sin().powi(2) + 0.3 * (7.0 * theta).sin().powi(2);
        let a = 0.5 * (1.0 - r).powi(3) + 0.4 * petals + 0.1 * (1.75 * theta).sin() * 0.2;
        a.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn acceptance_varies_with_angle_at_fixed_radius() {
        let area = SamplingArea::new(600.0, 0.0, 0.0);
        let radius = 150.0;
        let values: Vec<f64> = (0..16)
            .map(|i| {
                let theta = std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 16.0;
                let p = area.center + DVec2::new(theta.cos(), theta.sin()) * radius;
                StarSampling.acceptance(&area, p)
            })
            .collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.2, "petals should modulate acceptance: {values:?}");
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn center_has_body_term_only() {
        let area = SamplingArea::new(600.0, 0.1, 0.1);
        // atan2(0, 0) = 0, so every angular term vanishes.
        assert_eq!(StarSampling.acceptance(&area, area.center), 0.5);
    }

    #[test]
    fn samples_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(77);
        let area = SamplingArea::new(320.0, 0.2, 0.1);
        for _ in 0..300 {
            let pair = StarSampling.sample(&mut rng, &area);
            assert!(pair.original.x >= area.min.x && pair.original.x <= area.max.x);
            assert!(pair.mirrored.x >= area.center.x);
            assert!(pair.attempts <= 11);
        }
    }
}
