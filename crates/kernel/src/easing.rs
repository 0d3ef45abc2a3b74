//! Easing curves mapping ramp progress in [0, 1] to an acceleration factor.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

pub fn ease_in_out_sine(x: f32) -> f32 {
    -((PI * x).cos() - 1.0) / 2.0
}

pub fn ease_in_sine(x: f32) -> f32 {
    1.0 - (x * PI / 2.0).cos()
}

pub fn ease_in_cubic(x: f32) -> f32 {
    x * x * x
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Selectable ease curve.
///
/// Only [`Easing::InOutSine`] has zero slope at both ends; the others start
/// or stop abruptly and are there for tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    InOutSine,
    InSine,
    InCubic,
    Linear,
}

impl Easing {
    /// Apply the curve. Input is clamped to [0, 1] first, and the endpoints
    /// are exact: `apply(0) == 0`, `apply(1) == 1`.
    pub fn apply(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::InOutSine => ease_in_out_sine(x),
            Easing::InSine => ease_in_sine(x),
            Easing::InCubic => ease_in_cubic(x),
            Easing::Linear => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::InOutSine,
        Easing::InSine,
        Easing::InCubic,
        Easing::Linear,
    ];

    #[test]
    fn endpoints_are_exact() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for e in ALL {
            assert_eq!(e.apply(-3.0), 0.0);
            assert_eq!(e.apply(7.5), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=1000 {
                let y = e.apply(i as f32 / 1000.0);
                assert!(y >= prev, "{e:?} decreased at step {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn in_out_sine_is_flat_at_both_ends() {
        let h = 1e-3;
        let start = (Easing::InOutSine.apply(h) - Easing::InOutSine.apply(0.0)) / h;
        let end = (Easing::InOutSine.apply(1.0) - Easing::InOutSine.apply(1.0 - h)) / h;
        assert!(start < 0.01, "slope at 0 was {start}");
        assert!(end < 0.01, "slope at 1 was {end}");
        assert!((Easing::InOutSine.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn raw_functions() {
        assert!((ease_in_cubic(0.5) - 0.125).abs() < 1e-6);
        assert!((ease_in_sine(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out_sine(0.25) - 0.146_446_6).abs() < 1e-5);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    }

    #[test]
    fn easing_serializes_snake_case() {
        let s = serde_json::to_string(&Easing::InOutSine).unwrap();
        assert_eq!(s, "\"in_out_sine\"");
        let e: Easing = serde_json::from_str("\"in_cubic\"").unwrap();
        assert_eq!(e, Easing::InCubic);
    }
}
