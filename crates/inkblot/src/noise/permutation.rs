//! Permutation table backing the gradient noise hash.
use crate::random::SeededRandom;

/// Number of distinct lattice hash values.
pub const PERMUTATION_SIZE: usize = 256;

/// 512-entry hash table: 256 random bytes duplicated so lookups never wrap.
///
/// Each slot is an independent draw `floor(rand * 256)` from [`SeededRandom`], so values
/// may repeat. This is the value-noise style construction, not a Fisher-Yates shuffle of
/// `0..256`; the two give visibly different fields for the same seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    /// Draw a table from `rng`, consuming exactly 256 values.
    pub fn from_random(rng: &mut SeededRandom) -> Self {
        let mut values = [0u8; PERMUTATION_SIZE * 2];
        for i in 0..PERMUTATION_SIZE {
            let v = ((rng.next_f64() * PERMUTATION_SIZE as f64) as usize).min(255) as u8;
            values[i] = v;
            values[i + PERMUTATION_SIZE] = v;
        }
        Self { values }
    }

    /// Table entry at `index` (`0..512`).
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.values[index] as usize
    }

    /// The full 512-entry table.
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }
}
