//! Seeded pseudo-random float stream.
//!
//! [`SeededRandom`] produces the stream `fract(sin(state) * 10000)` with `state`
//! starting at the seed and incrementing after each draw. It is cheap and visually
//! adequate, and it is not cryptographically strong.
//!
//! Reproducibility: the stream is bit-exact for a given seed on a given platform and
//! math library. Ports or targets with a different `sin` implementation produce a
//! statistically similar stream, not an identical one.
use rand::RngCore;
use tracing::warn;

const SINE_AMPLITUDE: f64 = 10_000.0;
const U32_SPAN: f64 = 4_294_967_296.0;

/// Deterministic float stream in `[0, 1)` derived from a 32-bit seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u32,
    state: f64,
}

impl SeededRandom {
    /// Create a stream for `seed`.
    ///
    /// A zero seed is replaced by a non-zero seed from the thread RNG; callers that need
    /// determinism must pass a non-zero, fingerprint-derived seed.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 {
            let replacement = rand::random::<u32>().max(1);
            warn!(
                "Zero seed replaced by non-deterministic seed {}.",
                replacement
            );
            replacement
        } else {
            seed
        };
        Self {
            seed,
            state: seed as f64,
        }
    }

    /// The effective seed of this stream.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let x = self.state.sin() * SINE_AMPLITUDE;
        self.state += 1.0;
        let f = x - x.floor();
        // `x - floor(x)` can round up to exactly 1.0 for tiny negative x.
        if f >= 1.0 {
            0.0
        } else {
            f
        }
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * U32_SPAN) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
