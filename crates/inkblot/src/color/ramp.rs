//! Fixed 10-stop color ramps.
//!
//! A ramp assigns one color to each noise decile. Stops are drawn from the scheme's
//! primary and secondary colors plus black and white, in one of three canonical
//! layouts. The layouts are part of the compatibility contract: the same address must
//! map every decile to the same stop.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Number of stops in every ramp.
pub const RAMP_LEN: usize = 10;

/// Source of one ramp stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RampStop {
    Primary,
    Secondary,
    Black,
    White,
}

/// The three canonical stop sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RampLayout {
    /// Addresses containing `420`.
    Special420,
    /// Addresses with a run of five or more identical nibbles.
    LessUnique,
    Default,
}

use RampStop::{Black as K, Primary as P, Secondary as S, White as W};

const SPECIAL_420_STOPS: [RampStop; RAMP_LEN] = [K, P, S, P, W, S, P, K, S, W];
const LESS_UNIQUE_STOPS: [RampStop; RAMP_LEN] = [K, K, P, P, S, W, S, P, K, W];
const DEFAULT_STOPS: [RampStop; RAMP_LEN] = [K, P, P, S, W, S, P, K, S, W];

impl RampLayout {
    /// Stop sequence from the lowest to the highest decile.
    pub const fn stops(self) -> [RampStop; RAMP_LEN] {
        match self {
            RampLayout::Special420 => SPECIAL_420_STOPS,
            RampLayout::LessUnique => LESS_UNIQUE_STOPS,
            RampLayout::Default => DEFAULT_STOPS,
        }
    }
}

/// Resolved ramp: one color per noise decile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorRamp {
    layout: RampLayout,
    colors: [Rgb; RAMP_LEN],
}

impl ColorRamp {
    /// Resolve `layout` against the scheme's two colors.
    pub fn new(layout: RampLayout, primary: Rgb, secondary: Rgb) -> Self {
        let colors = layout.stops().map(|stop| match stop {
            RampStop::Primary => primary,
            RampStop::Secondary => secondary,
            RampStop::Black => Rgb::BLACK,
            RampStop::White => Rgb::WHITE,
        });
        Self { layout, colors }
    }

    pub fn layout(&self) -> RampLayout {
        self.layout
    }

    pub fn colors(&self) -> &[Rgb; RAMP_LEN] {
        &self.colors
    }

    /// Color at `index`, clamped to the last stop.
    pub fn get(&self, index: usize) -> Rgb {
        self.colors[index.min(RAMP_LEN - 1)]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
