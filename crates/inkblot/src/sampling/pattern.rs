//! Choosing a particle pattern from an address fingerprint.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;
use crate::sampling::{InvertedSampling, ParticleSampling, StandardSampling, StarSampling};

/// The three particle footprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParticlePattern {
    Standard,
    Inverted,
    Star,
}

impl ParticlePattern {
    /// Pick the pattern for `fingerprint`, in priority order:
    /// `420` anywhere in the address selects [`ParticlePattern::Star`], a palindromic
    /// ending selects [`ParticlePattern::Inverted`], anything else is
    /// [`ParticlePattern::Standard`].
    pub fn select(fingerprint: &Fingerprint) -> Self {
        if fingerprint.contains_420() {
            ParticlePattern::Star
        } else if fingerprint.is_palindrome {
            ParticlePattern::Inverted
        } else {
            ParticlePattern::Standard
        }
    }

    /// The sampling strategy implementing this pattern.
    pub fn sampler(self) -> Box<dyn ParticleSampling> {
        match self {
            ParticlePattern::Standard => Box::new(StandardSampling),
            ParticlePattern::Inverted => Box::new(InvertedSampling),
            ParticlePattern::Star => Box::new(StarSampling),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ParticlePattern::Standard => "standard",
            ParticlePattern::Inverted => "inverted",
            ParticlePattern::Star => "star",
        }
    }
}

impl fmt::Display for ParticlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
