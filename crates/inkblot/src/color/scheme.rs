//! Fingerprint to color scheme selection.
//!
//! Rules are checked in order:
//! 1. the address contains `420`: the fixed "420 Special" pair,
//! 2. less unique without a non-zero repeat: the monochrome pair,
//! 3. less unique with a non-zero repeat: the sepia pair,
//! 4. otherwise a primary color is derived from the address nibbles and a secondary
//!    color from it through a [`ColorRelationship`].
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::naming::color_name;
use crate::color::ramp::{ColorRamp, RampLayout};
use crate::color::{Hsl, Rgb};
use crate::fingerprint::Fingerprint;

const SPECIAL_420: FixedPair = FixedPair {
    scheme_name: "420 Special",
    primary: (Rgb::from_u32(0x3a7d44), "Kush Green"),
    secondary: (Rgb::from_u32(0x8e5ba8), "Haze Purple"),
};

const MONOCHROME: FixedPair = FixedPair {
    scheme_name: "Monochrome",
    primary: (Rgb::from_u32(0x1c1c1c), "Ink Black"),
    secondary: (Rgb::from_u32(0x808080), "50% Gray"),
};

const SEPIA: FixedPair = FixedPair {
    scheme_name: "Sepia",
    primary: (Rgb::from_u32(0x704214), "Sepia Brown"),
    secondary: (Rgb::from_u32(0xe3d3b0), "Parchment"),
};

/// Diversity above which the secondary color is split-complementary.
pub const HIGH_DIVERSITY: f64 = 0.7;
/// Diversity below which the secondary color is an analogous accent.
pub const LOW_DIVERSITY: f64 = 0.3;

const SATURATION_RANGE: (f64, f64) = (55.0, 90.0);
const LIGHTNESS_RANGE: (f64, f64) = (35.0, 60.0);
const ANALOGOUS_SPREAD: f64 = 30.0;
const ANALOGOUS_VARIATION: f64 = 10.0;

struct FixedPair {
    scheme_name: &'static str,
    primary: (Rgb, &'static str),
    secondary: (Rgb, &'static str),
}

/// How the secondary hue relates to the primary one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorRelationship {
    Complementary,
    Analogous,
    AnalogousAccent,
    Triadic,
    SplitComplementary,
    Tetradic,
}

/// Relationships a seed can pick when no feature rule applies.
pub const SEEDED_RELATIONSHIPS: [ColorRelationship; 5] = [
    ColorRelationship::Complementary,
    ColorRelationship::Analogous,
    ColorRelationship::Triadic,
    ColorRelationship::SplitComplementary,
    ColorRelationship::Tetradic,
];

impl ColorRelationship {
    /// Relationship for `fingerprint`: palindromes are complementary, diverse addresses
    /// split-complementary, repetitive ones analogous with an accent, the rest seeded.
    pub fn for_fingerprint(fingerprint: &Fingerprint) -> Self {
        if fingerprint.is_palindrome {
            ColorRelationship::Complementary
        } else if fingerprint.diversity > HIGH_DIVERSITY {
            ColorRelationship::SplitComplementary
        } else if fingerprint.diversity < LOW_DIVERSITY {
            ColorRelationship::AnalogousAccent
        } else {
            SEEDED_RELATIONSHIPS[fingerprint.seed as usize % SEEDED_RELATIONSHIPS.len()]
        }
    }

    /// Secondary color for `primary`. `variation` is in `[-10, 10]` degrees and only
    /// affects the analogous relationships; `odd_seed` flips the split-complementary side.
    pub fn secondary(self, primary: Hsl, variation: f64, odd_seed: bool) -> Hsl {
        let Hsl { h, s, l } = primary;
        match self {
            ColorRelationship::Complementary => Hsl::new(h + 180.0, s, l + 8.0),
            ColorRelationship::Analogous => Hsl::new(h + ANALOGOUS_SPREAD + variation, s, l),
            ColorRelationship::AnalogousAccent => {
                Hsl::new(h + ANALOGOUS_SPREAD + variation, s + 15.0, l + 12.0)
            }
            ColorRelationship::Triadic => Hsl::new(h + 120.0, s, l),
            ColorRelationship::SplitComplementary => {
                Hsl::new(h + if odd_seed { 210.0 } else { 150.0 }, s, l)
            }
            ColorRelationship::Tetradic => Hsl::new(h + 90.0, s, l - 8.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorRelationship::Complementary => "Complementary",
            ColorRelationship::Analogous => "Analogous",
            ColorRelationship::AnalogousAccent => "Analogous Accent",
            ColorRelationship::Triadic => "Triadic",
            ColorRelationship::SplitComplementary => "Split-Complementary",
            ColorRelationship::Tetradic => "Tetradic",
        }
    }
}

impl fmt::Display for ColorRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected colors for one address.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorScheme {
    /// "420 Special", "Monochrome", "Sepia", or the relationship name.
    pub scheme_name: String,
    /// Set for color-theory schemes only.
    pub relationship: Option<ColorRelationship>,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub primary_name: String,
    pub secondary_name: String,
    pub ramp: ColorRamp,
}

impl ColorScheme {
    /// Select the scheme for `fingerprint`. See [`select_scheme`].
    pub fn select(fingerprint: &Fingerprint) -> Self {
        select_scheme(fingerprint)
    }

    fn fixed(pair: &FixedPair, layout: RampLayout) -> Self {
        let (primary, primary_name) = pair.primary;
        let (secondary, secondary_name) = pair.secondary;
        Self {
            scheme_name: pair.scheme_name.to_owned(),
            relationship: None,
            primary,
            secondary,
            primary_name: primary_name.to_owned(),
            secondary_name: secondary_name.to_owned(),
            ramp: ColorRamp::new(layout, primary, secondary),
        }
    }
}

/// Select the color scheme and ramp for `fingerprint`.
pub fn select_scheme(fingerprint: &Fingerprint) -> ColorScheme {
    if fingerprint.contains_420() {
        return ColorScheme::fixed(&SPECIAL_420, RampLayout::Special420);
    }
    if fingerprint.is_less_unique {
        let pair = if fingerprint.has_non_zero_repeat {
            &SEPIA
        } else {
            &MONOCHROME
        };
        return ColorScheme::fixed(pair, RampLayout::LessUnique);
    }

    let primary_hsl = primary_hsl(fingerprint);
    let relationship = ColorRelationship::for_fingerprint(fingerprint);
    let variation = fingerprint.byte_at(7) as f64 / 255.0 * 2.0 * ANALOGOUS_VARIATION
        - ANALOGOUS_VARIATION;
    let secondary_hsl = relationship.secondary(primary_hsl, variation, fingerprint.seed % 2 == 1);

    let primary = primary_hsl.to_rgb();
    let secondary = secondary_hsl.to_rgb();
    ColorScheme {
        scheme_name: relationship.name().to_owned(),
        relationship: Some(relationship),
        primary,
        secondary,
        primary_name: color_name(primary_hsl),
        secondary_name: color_name(secondary_hsl),
        ramp: ColorRamp::new(RampLayout::Default, primary, secondary),
    }
}

/// Primary color: hue from the first three nibbles, saturation and lightness from the
/// next two nibble pairs mapped into fixed ranges.
pub fn primary_hsl(fingerprint: &Fingerprint) -> Hsl {
    let hue = (fingerprint.nibble(0) * 256 + fingerprint.nibble(1) * 16 + fingerprint.nibble(2))
        % 360;
    let s = map_byte(fingerprint.byte_at(3), SATURATION_RANGE);
    let l = map_byte(fingerprint.byte_at(5), LIGHTNESS_RANGE);
    Hsl::new(hue as f64, s, l)
}

fn map_byte(byte: u32, (lo, hi): (f64, f64)) -> f64 {
    lo + byte as f64 / 255.0 * (hi - lo)
}
