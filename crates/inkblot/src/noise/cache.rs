//! Memoization of noise samples for one generation run.
//!
//! Coordinates are quantized to four decimal places; the quantized triple is the key.
//! The cache is unbounded and lives exactly as long as its owning
//! [`GradientNoiseField`](crate::noise::GradientNoiseField).
use std::collections::HashMap;

/// Quantization factor: four decimal places.
pub const QUANTIZATION: f64 = 10_000.0;

/// Quantized `(x, y, z)` coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(pub i64, pub i64, pub i64);

impl CacheKey {
    /// Round each coordinate to four decimal places.
    pub fn quantize(x: f64, y: f64, z: f64) -> Self {
        Self(quantize(x), quantize(y), quantize(z))
    }

    /// Coordinate the key stands for.
    pub fn coordinates(&self) -> (f64, f64, f64) {
        (
            self.0 as f64 / QUANTIZATION,
            self.1 as f64 / QUANTIZATION,
            self.2 as f64 / QUANTIZATION,
        )
    }
}

fn quantize(v: f64) -> i64 {
    (v * QUANTIZATION).round() as i64
}

/// Hit/miss counters for a [`NoiseCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Run-scoped map from quantized coordinate to noise value in `[0, 1]`.
#[derive(Debug, Default)]
pub struct NoiseCache {
    entries: HashMap<CacheKey, f64>,
    stats: CacheStats,
}

impl NoiseCache {
    /// Creates a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&mut self, key: CacheKey, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(&v) = self.entries.get(&key) {
            self.stats.hits += 1;
            return v;
        }
        self.stats.misses += 1;
        let v = compute();
        self.entries.insert(key, v);
        v
    }

    /// Cached value for `key`, if any.
    pub fn get(&self, key: CacheKey) -> Option<f64> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Clears all entries and counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
