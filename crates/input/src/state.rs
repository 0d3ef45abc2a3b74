use drift_common::{Axis, DirectionSign, RampDirection};
use serde::{Deserialize, Serialize};

use crate::action::{KeyEvent, MoveKey};

/// Commanded direction and ramp direction for one axis.
///
/// All input transitions for an axis go through [`on_press`](Self::on_press)
/// and [`on_release`](Self::on_release):
///
/// | event              | sign        | ramp          |
/// |--------------------|-------------|---------------|
/// | press `s`          | `s`         | Accelerating  |
/// | release, sign == s | unchanged   | Decelerating  |
/// | release, sign != s | unchanged   | unchanged     |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisIntent {
    pub sign: DirectionSign,
    pub ramp: RampDirection,
}

impl AxisIntent {
    /// A press overrides any opposite command outright. The ramp value lives
    /// in the motion controller and is left alone, so speed carries over.
    pub fn on_press(&mut self, sign: DirectionSign) {
        self.sign = sign;
        self.ramp = RampDirection::Accelerating;
    }

    /// Returns whether the release matched the active command.
    pub fn on_release(&mut self, sign: DirectionSign) -> bool {
        if self.sign != sign {
            return false;
        }
        // Sign is kept so the ship keeps drifting the same way while the
        // ramp decays.
        self.ramp = RampDirection::Decelerating;
        true
    }
}

/// Per-axis movement intent derived from key press/release events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    axes: [AxisIntent; 2],
}

impl InputState {
    /// Both axes neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current intent on `axis`.
    pub fn axis(&self, axis: Axis) -> AxisIntent {
        self.axes[axis.index()]
    }

    /// Command `key`'s direction on its axis and start accelerating.
    pub fn press(&mut self, key: MoveKey) {
        let intent = &mut self.axes[key.axis().index()];
        let before = *intent;
        intent.on_press(key.sign());
        if *intent != before {
            tracing::debug!(%key, axis = ?key.axis(), "press");
        }
    }

    /// Decelerate `key`'s axis if `key` is the active command; otherwise ignored.
    pub fn release(&mut self, key: MoveKey) {
        if self.axes[key.axis().index()].on_release(key.sign()) {
            tracing::debug!(%key, axis = ?key.axis(), "release, decelerating");
        } else {
            tracing::trace!(%key, "stale release ignored");
        }
    }

    /// Route an event to [`press`](Self::press) or [`release`](Self::release).
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.press(key),
            KeyEvent::Released(key) => self.release(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_neutral() {
        let s = InputState::new();
        for axis in Axis::ALL {
            assert_eq!(s.axis(axis), AxisIntent::default());
            assert_eq!(s.axis(axis).sign, DirectionSign::Neutral);
            assert_eq!(s.axis(axis).ramp, RampDirection::Holding);
        }
    }

    #[test]
    fn press_sets_sign_and_accelerates() {
        let mut s = InputState::new();
        s.press(MoveKey::Left);
        let lat = s.axis(Axis::Lateral);
        assert_eq!(lat.sign, DirectionSign::Negative);
        assert_eq!(lat.ramp, RampDirection::Accelerating);
        assert_eq!(s.axis(Axis::Forward), AxisIntent::default());
    }

    #[test]
    fn press_is_idempotent() {
        let mut once = InputState::new();
        once.press(MoveKey::Forward);
        let mut twice = InputState::new();
        twice.press(MoveKey::Forward);
        twice.press(MoveKey::Forward);
        assert_eq!(once, twice);
    }

    #[test]
    fn matching_release_decelerates_and_keeps_sign() {
        let mut s = InputState::new();
        s.press(MoveKey::Backward);
        s.release(MoveKey::Backward);
        let fwd = s.axis(Axis::Forward);
        assert_eq!(fwd.sign, DirectionSign::Positive);
        assert_eq!(fwd.ramp, RampDirection::Decelerating);
    }

    #[test]
    fn stale_release_is_ignored() {
        // Hold right, press left, let go of right: still going left.
        let mut s = InputState::new();
        s.press(MoveKey::Right);
        s.press(MoveKey::Left);
        s.release(MoveKey::Right);
        let lat = s.axis(Axis::Lateral);
        assert_eq!(lat.sign, DirectionSign::Negative);
        assert_eq!(lat.ramp, RampDirection::Accelerating);
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut s = InputState::new();
        s.release(MoveKey::Left);
        assert_eq!(s, InputState::new());
    }

    #[test]
    fn opposite_press_flips_sign() {
        let mut s = InputState::new();
        s.press(MoveKey::Left);
        s.release(MoveKey::Left);
        s.press(MoveKey::Right);
        let lat = s.axis(Axis::Lateral);
        assert_eq!(lat.sign, DirectionSign::Positive);
        assert_eq!(lat.ramp, RampDirection::Accelerating);
    }

    #[test]
    fn axes_are_independent() {
        let mut s = InputState::new();
        s.press(MoveKey::Forward);
        s.press(MoveKey::Right);
        s.release(MoveKey::Forward);
        assert_eq!(s.axis(Axis::Forward).ramp, RampDirection::Decelerating);
        assert_eq!(s.axis(Axis::Lateral).ramp, RampDirection::Accelerating);
    }

    #[test]
    fn apply_dispatches_to_press_and_release() {
        let mut s = InputState::new();
        s.apply(KeyEvent::Pressed(MoveKey::Right));
        assert_eq!(s.axis(Axis::Lateral).sign, DirectionSign::Positive);
        s.apply(KeyEvent::Released(MoveKey::Right));
        assert_eq!(s.axis(Axis::Lateral).ramp, RampDirection::Decelerating);
        assert_eq!(s.axis(Axis::Lateral).sign, DirectionSign::Positive);
    }
}
