//! Seeded 3D gradient noise.
//!
//! [`GradientNoiseField`] is classic improved gradient noise: integer/fraction split of the
//! coordinate, quintic fade `6t^5 - 15t^4 + 10t^3`, gradient hashing of the eight
//! surrounding lattice corners through a [`PermutationTable`], trilinear blend, and a
//! final remap from `[-1, 1]` to `[0, 1]`.
//!
//! Samples are memoized in a run-scoped [`NoiseCache`]. The field evaluates the noise at
//! the quantized coordinate it caches under, so a sample never depends on which nearby
//! coordinate happened to be queried first.
use crate::error::{Error, Result};
use crate::random::SeededRandom;

pub mod cache;
pub mod permutation;

pub use cache::{CacheKey, CacheStats, NoiseCache};
pub use permutation::PermutationTable;

/// Gradient noise field owning its permutation table and sample cache.
#[derive(Debug)]
pub struct GradientNoiseField {
    table: PermutationTable,
    cache: NoiseCache,
}

impl GradientNoiseField {
    /// Build a field whose permutation table is drawn from a fresh stream for `seed`.
    pub fn new(seed: u32) -> Self {
        Self::from_random(&mut SeededRandom::new(seed))
    }

    /// Build a field by drawing the permutation table from `rng`.
    pub fn from_random(rng: &mut SeededRandom) -> Self {
        Self::with_table(PermutationTable::from_random(rng))
    }

    /// Build a field around an existing table.
    pub fn with_table(table: PermutationTable) -> Self {
        Self {
            table,
            cache: NoiseCache::new(),
        }
    }

    /// Noise in `[0, 1]` at `(x, y, z)`, or an error for non-finite input.
    pub fn try_sample(&mut self, x: f64, y: f64, z: f64) -> Result<f64> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(Error::NonFiniteCoordinate { x, y, z });
        }
        let key = CacheKey::quantize(x, y, z);
        let table = &self.table;
        Ok(self.cache.get_or_insert_with(key, || {
            let (qx, qy, qz) = key.coordinates();
            evaluate(table, qx, qy, qz)
        }))
    }

    /// Noise in `[0, 1]` at `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if any coordinate is NaN or infinite.
    pub fn sample(&mut self, x: f64, y: f64, z: f64) -> f64 {
        self.try_sample(x, y, z).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Two-dimensional slice at `z = 0`.
    pub fn sample_2d(&mut self, x: f64, y: f64) -> f64 {
        self.sample(x, y, 0.0)
    }

    /// Uncached noise at the exact coordinate.
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        evaluate(&self.table, x, y, z)
    }

    /// Sum of `octaves` cached samples at growing frequency, normalized back to `[0, 1]`.
    ///
    /// With `octaves <= 1` this is exactly [`GradientNoiseField::sample`].
    pub fn fractal(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        if octaves <= 1 {
            return self.sample(x, y, z);
        }

        let mut total = 0.0;
        let mut max_amplitude = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for _ in 0..octaves {
            total += amplitude * self.sample(x * frequency, y * frequency, z * frequency);
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_amplitude > 0.0 {
            (total / max_amplitude).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.table
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset with one of twelve cube-edge gradients picked by `hash`.
#[inline]
fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

fn evaluate(p: &PermutationTable, x: f64, y: f64, z: f64) -> f64 {
    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
    let xi = (fx as i64).rem_euclid(256) as usize;
    let yi = (fy as i64).rem_euclid(256) as usize;
    let zi = (fz as i64).rem_euclid(256) as usize;

    let x = x - fx;
    let y = y - fy;
    let z = z - fz;

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let a = p.get(xi) + yi;
    let aa = p.get(a) + zi;
    let ab = p.get(a + 1) + zi;
    let b = p.get(xi + 1) + yi;
    let ba = p.get(b) + zi;
    let bb = p.get(b + 1) + zi;

    let n = lerp(
        w,
        lerp(
            v,
            lerp(u, grad(p.get(aa), x, y, z), grad(p.get(ba), x - 1.0, y, z)),
            lerp(
                u,
                grad(p.get(ab), x, y - 1.0, z),
                grad(p.get(bb), x - 1.0, y - 1.0, z),
            ),
        ),
        lerp(
            v,
            lerp(
                u,
                grad(p.get(aa + 1), x, y, z - 1.0),
                grad(p.get(ba + 1), x - 1.0, y, z - 1.0),
            ),
            lerp(
                u,
                grad(p.get(ab + 1), x, y - 1.0, z - 1.0),
                grad(p.get(bb + 1), x - 1.0, y - 1.0, z - 1.0),
            ),
        ),
    );

    ((n + 1.0) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn fade_hits_endpoints_and_midpoint() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lattice_points_sit_at_midpoint() {
        // Every gradient dot product vanishes on integer coordinates.
        let field = GradientNoiseField::new(31337);
        for (x, y, z) in [(0.0, 0.0, 0.0), (3.0, 7.0, 1.0), (-4.0, 250.0, 9.0)] {
            assert_eq!(field.evaluate(x, y, z), 0.5);
        }
    }

    #[test]
    fn range_is_unit_interval_for_finite_inputs() {
        let mut field = GradientNoiseField::new(2024);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let x = rng.random_range(-500.0..500.0);
            let y = rng.random_range(-500.0..500.0);
            let z = rng.random_range(-50.0..50.0);
            let v = field.sample(x, y, z);
            assert!((0.0..=1.0).contains(&v), "noise({x}, {y}, {z}) = {v}");
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut a = GradientNoiseField::new(555);
        let mut b = GradientNoiseField::new(555);
        for i in 0..100 {
            let t = i as f64 * 0.173;
            assert_eq!(a.sample(t, t * 0.5, 0.25).to_bits(), b.sample(t, t * 0.5, 0.25).to_bits());
        }
    }

    #[test]
    fn field_varies_between_lattice_points() {
        let mut field = GradientNoiseField::new(8);
        let values: Vec<f64> = (0..64).map(|i| field.sample(i as f64 * 0.37, 0.61, 0.0)).collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.05);
    }

    #[test]
    fn cache_serves_quantized_neighbours() {
        let mut field = GradientNoiseField::new(99);
        let a = field.sample(1.23456, 2.0, 0.5);
        let b = field.sample(1.234561, 2.0, 0.5);
        assert_eq!(a, b);
        assert_eq!(field.cache_stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(a, field.evaluate(1.2346, 2.0, 0.5));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut field = GradientNoiseField::new(1);
        assert!(matches!(
            field.try_sample(f64::NAN, 0.0, 0.0),
            Err(Error::NonFiniteCoordinate { .. })
        ));
        assert!(field.try_sample(0.0, f64::INFINITY, 0.0).is_err());
        assert!(field.try_sample(0.1, 0.2, 0.3).is_ok());
        assert_eq!(field.cache_len(), 1);
    }

    #[test]
    #[should_panic(expected = "non-finite noise coordinate")]
    fn sample_panics_on_nan() {
        GradientNoiseField::new(1).sample(0.0, f64::NAN, 0.0);
    }

    #[test]
    fn sample_and_try_sample_share_the_cache() {
        let mut field = GradientNoiseField::new(8);
        let first = field.sample(1.25, 0.5, 0.75);
        assert_eq!(field.try_sample(1.25, 0.5, 0.75).unwrap(), first);
        assert_eq!(field.cache_len(), 1);
        let stats = field.cache_stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[test]
    fn single_octave_fractal_equals_sample() {
        let mut field = GradientNoiseField::new(4);
        let direct = field.sample(0.37, 0.81, 0.2);
        assert_eq!(field.fractal(0.37, 0.81, 0.2, 1, 0.5, 2.0), direct);

        let multi = field.fractal(0.37, 0.81, 0.2, 5, 0.5, 2.0);
        assert!((0.0..=1.0).contains(&multi));
    }
}
