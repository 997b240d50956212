//! Address feature extraction.
//!
//! Turns an Ethereum-style address (`0x` followed by hex nibbles) into a [`Fingerprint`]:
//! per-nibble ratios, repetition and palindrome flags, and the 32-bit seed that drives
//! every pseudo-random decision of one generation run.
//!
//! Extraction never fails. Input without a `0x` prefix, empty input, or input with
//! non-hex characters degrades to [`Fingerprint::fallback`], whose seed is drawn from
//! the thread RNG, so the resulting artwork is intentionally not reproducible.
use sha2::{Digest, Sha256};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of identical consecutive nibbles that marks an address as less unique.
pub const REPEAT_RUN_THRESHOLD: usize = 5;

/// Shortest suffix length considered by the palindromic-ending test.
pub const MIN_PALINDROME_SUFFIX: usize = 4;

const FALLBACK_RATIO: f64 = 0.5;
const NIBBLE_SOURCE_LEN: usize = 40;

/// Deterministic feature record extracted from an address.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fingerprint {
    /// Normalized address (prefix stripped, lowercase), or the trimmed raw input for a fallback.
    pub address: String,
    /// Distinct nibble values divided by 16.
    pub diversity: f64,
    /// Share of `0` nibbles.
    pub zero_ratio: f64,
    /// Share of `1` nibbles.
    pub one_ratio: f64,
    /// Share of `a`..=`f` nibbles.
    pub letter_ratio: f64,
    /// Share of nibbles with value >= 8.
    pub high_value_ratio: f64,
    /// Share of nibbles with an even value.
    pub even_ratio: f64,
    /// Some suffix of length >= 4 reads the same backwards.
    pub is_palindrome: bool,
    /// A run of at least five identical nibbles exists.
    pub is_less_unique: bool,
    /// A run of at least five identical nibbles exists for a nibble other than `0`.
    pub has_non_zero_repeat: bool,
    /// Length of the longest run of identical nibbles.
    pub longest_run: usize,
    /// First 32 bits (big endian) of SHA-256 over the normalized address.
    pub seed: u32,
    /// Whether the input was malformed and the record was synthesized.
    pub is_fallback: bool,
}

impl Fingerprint {
    /// Extract the fingerprint of `address`. See [`extract`].
    pub fn from_address(address: &str) -> Self {
        extract(address)
    }

    /// Synthesize the fallback record for malformed input.
    ///
    /// Every ratio is fixed at 0.5 and the seed is drawn from the thread RNG.
    pub fn fallback(raw: &str) -> Self {
        let seed = rand::random::<u32>().max(1);
        Self {
            address: raw.trim().to_owned(),
            diversity: FALLBACK_RATIO,
            zero_ratio: FALLBACK_RATIO,
            one_ratio: FALLBACK_RATIO,
            letter_ratio: FALLBACK_RATIO,
            high_value_ratio: FALLBACK_RATIO,
            even_ratio: FALLBACK_RATIO,
            is_palindrome: false,
            is_less_unique: false,
            has_non_zero_repeat: false,
            longest_run: 0,
            seed,
            is_fallback: true,
        }
    }

    /// Whether the address carries the `420` easter egg anywhere.
    pub fn contains_420(&self) -> bool {
        self.address.contains("420")
    }

    /// Hex characters read by color derivation, at least 40 long.
    ///
    /// Valid addresses cycle their own nibbles; fallbacks repeat the seed's hex digits.
    /// Character `i` is [`Fingerprint::nibble`]`(i)`.
    pub fn nibbles(&self) -> String {
        let source = if self.is_fallback || self.address.is_empty() {
            format!("{:08x}", self.seed)
        } else {
            self.address.clone()
        };
        source.chars().cycle().take(NIBBLE_SOURCE_LEN.max(source.len())).collect()
    }

    /// Value of the nibble at `index`, wrapping around the address (or the seed's eight
    /// hex digits for fallbacks).
    pub fn nibble(&self, index: usize) -> u32 {
        let digits = self.address.as_bytes();
        if self.is_fallback || digits.is_empty() {
            let shift = 28 - 4 * (index % 8) as u32;
            (self.seed >> shift) & 0xf
        } else {
            hex_value(digits[index % digits.len()]).unwrap_or(0)
        }
    }

    /// Byte formed by the nibbles at `index` and `index + 1`.
    pub fn byte_at(&self, index: usize) -> u32 {
        self.nibble(index) * 16 + self.nibble(index + 1)
    }
}

/// Extract a [`Fingerprint`] from an address-like string. Never fails.
pub fn extract(address: &str) -> Fingerprint {
    match normalize(address) {
        Some(normalized) => from_normalized(normalized),
        None => {
            warn!(
                "Address '{}' is not 0x-prefixed hex; using a non-deterministic fallback fingerprint.",
                address
            );
            Fingerprint::fallback(address)
        }
    }
}

/// Strip the `0x` prefix and lowercase, rejecting empty or non-hex payloads.
pub fn normalize(address: &str) -> Option<String> {
    let trimmed = address.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))?;
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(body.to_ascii_lowercase())
}

/// First 32 bits of SHA-256 over `normalized`, read big endian.
pub fn seed_for(normalized: &str) -> u32 {
    let digest = Sha256::digest(normalized.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

fn from_normalized(address: String) -> Fingerprint {
    let values: Vec<u32> = address.bytes().filter_map(hex_value).collect();
    let len = values.len() as f64;

    let ratio = |pred: fn(u32) -> bool| values.iter().filter(|&&v| pred(v)).count() as f64 / len;

    let mut seen = [false; 16];
    for &v in &values {
        seen[v as usize] = true;
    }
    let distinct = seen.iter().filter(|&&s| s).count();

    let runs = runs(&values);
    let longest_run = runs.iter().map(|&(_, len)| len).max().unwrap_or(0);
    let is_less_unique = longest_run >= REPEAT_RUN_THRESHOLD;
    let has_non_zero_repeat = runs
        .iter()
        .any(|&(nibble, len)| len >= REPEAT_RUN_THRESHOLD && nibble != 0);

    Fingerprint {
        diversity: distinct as f64 / 16.0,
        zero_ratio: ratio(|v| v == 0),
        one_ratio: ratio(|v| v == 1),
        letter_ratio: ratio(|v| v >= 10),
        high_value_ratio: ratio(|v| v >= 8),
        even_ratio: ratio(|v| v % 2 == 0),
        is_palindrome: has_palindromic_ending(address.as_bytes()),
        is_less_unique,
        has_non_zero_repeat,
        longest_run,
        seed: seed_for(&address),
        is_fallback: false,
        address,
    }
}

/// Collapse nibble values into `(nibble, run length)` pairs.
fn runs(values: &[u32]) -> Vec<(u32, usize)> {
    let mut out: Vec<(u32, usize)> = Vec::new();
    for &v in values {
        match out.last_mut() {
            Some((nibble, len)) if *nibble == v => *len += 1,
            _ => out.push((v, 1)),
        }
    }
    out
}

/// True when any suffix of length `MIN_PALINDROME_SUFFIX..=len` is a palindrome.
fn has_palindromic_ending(bytes: &[u8]) -> bool {
    let n = bytes.len();
    (MIN_PALINDROME_SUFFIX..=n).any(|l| {
        let suffix = &bytes[n - l..];
        suffix.iter().eq(suffix.iter().rev())
    })
}

fn hex_value(b: u8) -> Option<u32> {
    (b as char).to_digit(16)
}
