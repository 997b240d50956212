//! Human-readable color names for trait metadata.
use crate::color::Hsl;

/// Twelve 30° hue buckets, centered on multiples of 30° starting at red.
const HUE_NAMES: [&str; 12] = [
    "Red",
    "Orange",
    "Yellow",
    "Chartreuse",
    "Green",
    "Spring Green",
    "Cyan",
    "Azure",
    "Blue",
    "Violet",
    "Magenta",
    "Rose",
];

/// Saturation (percent) below which a color is named as a gray.
pub const GRAY_SATURATION: f64 = 12.0;

/// Base hue name for `hue` in degrees.
pub fn hue_name(hue: f64) -> &'static str {
    let bucket = ((hue.rem_euclid(360.0) + 15.0) / 30.0) as usize % HUE_NAMES.len();
    HUE_NAMES[bucket]
}

/// Name `hsl` from its hue bucket plus a lightness or saturation modifier.
///
/// Near-gray colors are named by lightness (`"62% Gray"`); otherwise dark colors are
/// "Deep", light ones "Pale", dull ones "Muted", and saturated mid-tones "Vivid".
pub fn color_name(hsl: Hsl) -> String {
    if hsl.s < GRAY_SATURATION {
        return format!("{}% Gray", hsl.l.round() as u32);
    }

    let base = hue_name(hsl.h);
    let modifier = if hsl.l < 30.0 {
        Some("Deep")
    } else if hsl.l > 70.0 {
        Some("Pale")
    } else if hsl.s < 35.0 {
        Some("Muted")
    } else if hsl.s > 80.0 && (40.0..=60.0).contains(&hsl.l) {
        Some("Vivid")
    } else {
        None
    };

    match modifier {
        Some(m) => format!("{m} {base}"),
        None => base.to_owned(),
    }
}
