//! Rejection sampling of mirrored particle positions.
//!
//! Every strategy draws a uniform candidate in the left half of the margin-trimmed
//! canvas, scores it with a position-dependent acceptance probability, and accepts it when
//! a uniform roll falls below that probability. After [`MAX_REJECTIONS`] rejections the
//! next candidate is accepted unconditionally, so a sample takes at most
//! `MAX_REJECTIONS + 1` attempts. The accepted point is mirrored to `(size - x, y)`.
use glam::DVec2;
use rand::RngCore;

pub mod inverted;
pub mod pattern;
pub mod standard;
pub mod star;

pub use inverted::InvertedSampling;
pub use pattern::ParticlePattern;
pub use standard::StandardSampling;
pub use star::StarSampling;

/// Rejections tolerated before a candidate is accepted unconditionally.
pub const MAX_REJECTIONS: u32 = 10;

/// Margin-trimmed sampling region on a square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingArea {
    /// Canvas edge length in pixels.
    pub size: f64,
    /// Top-left corner of the usable left half.
    pub min: DVec2,
    /// Bottom-right corner of the usable left half (`x` is the vertical axis of symmetry).
    pub max: DVec2,
    /// Canvas center.
    pub center: DVec2,
    /// Distance from the center to the trimmed left and top edges.
    pub half_extent: DVec2,
}

impl SamplingArea {
    /// Region for a `size` canvas with margins given as fractions of `size`.
    pub fn new(size: f64, horizontal_margin: f64, vertical_margin: f64) -> Self {
        let center = DVec2::splat(size * 0.5);
        let min = DVec2::new(size * horizontal_margin, size * vertical_margin);
        let max = DVec2::new(center.x, size * (1.0 - vertical_margin));
        let half_extent = (center - min).max(DVec2::ZERO);
        Self {
            size,
            min,
            max,
            center,
            half_extent,
        }
    }

    /// Whether candidates can land anywhere but a single point or line.
    pub fn has_usable_area(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y
    }

    /// Candidate position for uniform draws `u`, `v` in `[0, 1)`.
    pub fn point_at(&self, u: f64, v: f64) -> DVec2 {
        DVec2::new(
            self.min.x + u * (self.max.x - self.min.x),
            self.min.y + v * (self.max.y - self.min.y),
        )
    }

    /// Offset from the center scaled to `[-1, 1]` per axis.
    pub fn normalized_offset(&self, p: DVec2) -> DVec2 {
        let d = p - self.center;
        DVec2::new(
            if self.half_extent.x > 0.0 { d.x / self.half_extent.x } else { 0.0 },
            if self.half_extent.y > 0.0 { d.y / self.half_extent.y } else { 0.0 },
        )
    }

    /// Distance from the center over the smaller half-extent, clamped to `[0, 1]`.
    pub fn radial_distance(&self, p: DVec2) -> f64 {
        let limit = self.half_extent.min_element();
        if limit <= 0.0 {
            return 0.0;
        }
        (p.distance(self.center) / limit).min(1.0)
    }

    /// Angle of `p` around the center, in radians.
    pub fn angle(&self, p: DVec2) -> f64 {
        let d = p - self.center;
        d.y.atan2(d.x)
    }

    /// Reflection across the vertical center line.
    #[inline]
    pub fn mirror(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.size - p.x, p.y)
    }
}

/// An accepted particle and its reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymmetricPair {
    pub original: DVec2,
    pub mirrored: DVec2,
    /// Candidates drawn, `1..=MAX_REJECTIONS + 1`.
    pub attempts: u32,
}

impl SymmetricPair {
    /// Whether the rejection cap forced this acceptance.
    pub fn was_forced(&self) -> bool {
        self.attempts > MAX_REJECTIONS
    }
}

/// Trait for particle sampling strategies.
pub trait ParticleSampling: Send + Sync {
    /// Name of this strategy.
    fn name(&self) -> &'static str;

    /// Probability in `[0, 1]` of keeping `candidate`.
    fn acceptance(&self, area: &SamplingArea, candidate: DVec2) -> f64;

    /// Draw one mirrored particle pair.
    fn sample(&self, rng: &mut dyn RngCore, area: &SamplingArea) -> SymmetricPair {
        let mut attempts = 0;
        loop {
            attempts += 1;
            let candidate = area.point_at(rand01(rng), rand01(rng));
            let acceptance = self.acceptance(area, candidate).clamp(0.0, 1.0);
            if rand01(rng) < acceptance || attempts > MAX_REJECTIONS {
                return SymmetricPair {
                    original: candidate,
                    mirrored: area.mirror(candidate),
                    attempts,
                };
            }
        }
    }
}

/// Running totals over sampled pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplerStats {
    pub samples: u64,
    pub attempts: u64,
    pub forced: u64,
}

impl SamplerStats {
    pub fn record(&mut self, pair: &SymmetricPair) {
        self.samples += 1;
        self.attempts += pair.attempts as u64;
        if pair.was_forced() {
            self.forced += 1;
        }
    }

    /// Mean candidates drawn per accepted pair.
    pub fn mean_attempts(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.attempts as f64 / self.samples as f64
        }
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    pub(crate) struct FixedRng {
        pub(crate) value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    struct Never;

    impl ParticleSampling for Never {
        fn name(&self) -> &'static str {
            "never"
        }

        fn acceptance(&self, _area: &SamplingArea, _candidate: DVec2) -> f64 {
            0.0
        }
    }

    struct Always;

    impl ParticleSampling for Always {
        fn name(&self) -> &'static str {
            "always"
        }

        fn acceptance(&self, _area: &SamplingArea, _candidate: DVec2) -> f64 {
            1.0
        }
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u32::MAX };
        let v = rand01(&mut rng);
        assert!(v < 1.0);
        assert_eq!(rand01(&mut FixedRng { value: 0 }), 0.0);
    }

    #[test]
    fn area_trims_margins_and_keeps_left_half() {
        let area = SamplingArea::new(1000.0, 0.1, 0.2);
        assert_eq!(area.min, DVec2::new(100.0, 200.0));
        assert_eq!(area.max, DVec2::new(500.0, 800.0));
        assert_eq!(area.half_extent, DVec2::new(400.0, 300.0));
        assert!(area.has_usable_area());

        assert_eq!(area.normalized_offset(DVec2::new(100.0, 200.0)), DVec2::new(-1.0, -1.0));
        assert_eq!(area.normalized_offset(DVec2::new(500.0, 800.0)), DVec2::new(0.0, 1.0));
        assert_eq!(area.radial_distance(area.center), 0.0);
        assert_eq!(area.radial_distance(DVec2::new(0.0, 0.0)), 1.0);
    }

    #[test]
    fn mirror_reflects_across_center_line() {
        let area = SamplingArea::new(64.0, 0.0, 0.0);
        assert_eq!(area.mirror(DVec2::new(10.0, 5.0)), DVec2::new(54.0, 5.0));
        assert_eq!(area.mirror(DVec2::new(32.0, 1.0)), DVec2::new(32.0, 1.0));
    }

    #[test]
    fn rejection_is_capped_at_eleven_attempts() {
        let mut rng = StdRng::seed_from_u64(3);
        let area = SamplingArea::new(256.0, 0.1, 0.1);
        for _ in 0..50 {
            let pair = Never.sample(&mut rng, &area);
            assert_eq!(pair.attempts, MAX_REJECTIONS + 1);
            assert!(pair.was_forced());
        }
    }

    #[test]
    fn certain_acceptance_takes_one_attempt() {
        let mut rng = StdRng::seed_from_u64(4);
        let area = SamplingArea::new(256.0, 0.1, 0.1);
        let pair = Always.sample(&mut rng, &area);
        assert_eq!(pair.attempts, 1);
        assert!(!pair.was_forced());
    }

    #[test]
    fn degenerate_area_still_terminates() {
        let mut rng = StdRng::seed_from_u64(5);
        let area = SamplingArea::new(100.0, 0.5, 0.5);
        assert!(!area.has_usable_area());
        let pair = Never.sample(&mut rng, &area);
        assert_eq!(pair.original, DVec2::new(50.0, 50.0));
        assert_eq!(pair.mirrored, pair.original);
    }

    #[test]
    fn stats_accumulate_attempts() {
        let mut stats = SamplerStats::default();
        let area = SamplingArea::new(10.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(6);
        stats.record(&Always.sample(&mut rng, &area));
        stats.record(&Never.sample(&mut rng, &area));
        assert_eq!(stats.samples, 2);
        assert_eq!(stats.attempts, 12);
        assert_eq!(stats.forced, 1);
        assert_eq!(stats.mean_attempts(), 6.0);
    }
}
