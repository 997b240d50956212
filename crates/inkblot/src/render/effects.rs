//! Ink spots, drips and density variation applied after the frame loop.
//!
//! Every mark goes through the canvas' mirrored operations, so the raster keeps its exact
//! left/right symmetry. All draws come from the caller's random stream.
use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use rand::RngCore;

use crate::color::Rgb;
use crate::render::canvas::Canvas;
use crate::sampling::{rand01, SamplingArea};

/// Fewest spots scattered per render.
pub const MIN_SPOTS: u32 = 40;
/// Most spots scattered per render.
pub const MAX_SPOTS: u32 = 60;
/// Chance that a spot grows a drip.
pub const DRIP_CHANCE: f64 = 0.2;
/// Pixel distance between drip stamps.
pub const DRIP_STEP: f64 = 1.5;
/// Channel mean below which a pixel counts as ink for density variation.
pub const INK_THRESHOLD: f32 = 200.0;
/// Largest fraction an ink pixel is lightened toward white.
pub const MAX_LIGHTEN: f64 = 0.06;

/// What the effects pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectStats {
    /// Spots that landed on the canvas.
    pub spots: u32,
    pub drips: u32,
    /// Stamps laid down by all drips.
    pub drip_steps: u32,
    /// Mirrored pixel pairs whose ink density was varied.
    pub textured: u64,
}

/// Scatter spots around the blot, let some of them drip, then vary ink density.
///
/// Spots sit at `2r * sqrt(u)` from the center for `u` in `[0.5, 1)`, where `r` is half the
/// smaller half-extent of `area`, so they cluster near the rim of the blot.
pub fn apply(
    canvas: &mut Canvas,
    rng: &mut dyn RngCore,
    area: &SamplingArea,
    ink: Rgb,
) -> EffectStats {
    let mut stats = EffectStats::default();
    let size = canvas.size() as f64;
    let main_radius = area.half_extent.min_element() * 0.5;

    let count = int_between(rng, MIN_SPOTS, MAX_SPOTS);
    for _ in 0..count {
        let angle = uniform(rng, 0.0, TAU);
        let reach = main_radius * uniform(rng, 0.5, 1.0).sqrt() * 2.0;
        let at = area.center + DVec2::from_angle(angle) * reach.min(main_radius * 2.0);
        if !in_bounds(at, size) {
            continue;
        }

        let radius = if rand01(rng) < 0.9 {
            uniform(rng, 1.0, 2.0)
        } else {
            uniform(rng, 2.0, 3.0)
        };
        canvas.stamp_mirrored_pair(at, radius, ink);
        stats.spots += 1;

        if rand01(rng) < DRIP_CHANCE {
            stats.drip_steps += drip(canvas, rng, at, radius, ink);
            stats.drips += 1;
        }
    }

    stats.textured =
        canvas.vary_ink_density(INK_THRESHOLD, || uniform(&mut *rng, 0.0, MAX_LIGHTEN) as f32);
    stats
}

/// Run a short, mostly downward trail from `start` that thins as it goes.
///
/// Stops early at the canvas edge. Returns the number of stamps drawn.
pub fn drip(
    canvas: &mut Canvas,
    rng: &mut dyn RngCore,
    start: DVec2,
    radius: f64,
    ink: Rgb,
) -> u32 {
    let size = canvas.size() as f64;
    let length = int_between(rng, 2, 10);
    let mut angle = uniform(rng, FRAC_PI_2 - 0.3, FRAC_PI_2 + 0.3);
    let mut at = start;
    let mut steps = 0;

    for i in 0..length {
        angle += uniform(rng, -0.15, 0.15);
        let next = at + DVec2::from_angle(angle) * DRIP_STEP;
        if !in_bounds(next, size) {
            break;
        }
        let taper = (1.0 - i as f64 / length as f64).powf(0.8);
        canvas.stamp_mirrored_pair(next, (radius * 0.7 * taper).max(0.5), ink);
        at = next;
        steps += 1;
    }
    steps
}

fn in_bounds(p: DVec2, size: f64) -> bool {
    (0.0..size).contains(&p.x) && (0.0..size).contains(&p.y)
}

fn uniform(rng: &mut dyn RngCore, lo: f64, hi: f64) -> f64 {
    lo + rand01(rng) * (hi - lo)
}

/// Uniform integer in `lo..=hi`.
fn int_between(rng: &mut dyn RngCore, lo: u32, hi: u32) -> u32 {
    lo + (rand01(rng) * (hi - lo + 1) as f64) as u32
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;

    const INK: Rgb = Rgb::new(20, 10, 40);

    fn area(size: f64) -> SamplingArea {
        SamplingArea::new(size, 0.1, 0.1)
    }

    #[test]
    fn effects_keep_the_canvas_symmetric() {
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut canvas = Canvas::new(97);
            let stats = apply(&mut canvas, &mut rng, &area(97.0), INK);
            assert!(canvas.is_mirror_symmetric(), "seed {seed}");
            assert!(stats.spots > 0);
            assert!(stats.textured > 0);
        }
    }

    #[test]
    fn spot_count_and_drips_are_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut canvas = Canvas::new(128);
        let stats = apply(&mut canvas, &mut rng, &area(128.0), INK);
        // Spots stay within one half-extent of the center, so none are skipped.
        assert!((MIN_SPOTS..=MAX_SPOTS).contains(&stats.spots));
        assert!(stats.drips <= stats.spots);
        assert!(stats.drip_steps <= stats.drips * 10);
    }

    #[test]
    fn corners_stay_clean() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut canvas = Canvas::new(128);
        apply(&mut canvas, &mut rng, &area(128.0), INK);
        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
            assert_eq!(canvas.pixel(x, y), [255.0; 3]);
        }
    }

    #[test]
    fn same_stream_gives_same_marks() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(77);
            let mut canvas = Canvas::new(64);
            let stats = apply(&mut canvas, &mut rng, &area(64.0), INK);
            (canvas, stats)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn drip_runs_downward_and_stops_at_the_edge() {
        // A zero stream: length 2, angle pi/2 - 0.3, wobble -0.15 per step.
        let mut canvas = Canvas::new(32);
        let start = DVec2::new(8.0, 8.0);
        let steps = drip(&mut canvas, &mut FixedRng { value: 0 }, start, 2.0, INK);
        assert_eq!(steps, 2);
        assert_ne!(canvas.pixel(9, 10), [255.0; 3]);
        assert_eq!(canvas.pixel(8, 4), [255.0; 3]);
        assert!(canvas.is_mirror_symmetric());

        let mut edge = Canvas::new(32);
        let start = DVec2::new(8.0, 31.5);
        assert_eq!(drip(&mut edge, &mut StdRng::seed_from_u64(1), start, 2.0, INK), 0);
        assert_eq!(edge, Canvas::new(32));
    }
}
