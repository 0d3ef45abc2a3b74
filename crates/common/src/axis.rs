use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One independent degree of planar movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Left/right, scene X.
    Lateral,
    /// Forward/backward, scene Z. Forward is -Z.
    Forward,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Lateral, Axis::Forward];

    /// Slot of this axis in per-axis arrays.
    pub const fn index(self) -> usize {
        match self {
            Axis::Lateral => 0,
            Axis::Forward => 1,
        }
    }

    /// Unit vector this axis moves along in scene space.
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::Lateral => Vec3::X,
            Axis::Forward => Vec3::Z,
        }
    }
}

/// Commanded movement direction on an axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionSign {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl DirectionSign {
    pub const fn as_f32(self) -> f32 {
        match self {
            DirectionSign::Negative => -1.0,
            DirectionSign::Neutral => 0.0,
            DirectionSign::Positive => 1.0,
        }
    }
}

/// Which way an axis ramp is moving.
///
/// `Holding` is only the initial state. A saturated ramp keeps its direction;
/// the clamp stops it from moving further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RampDirection {
    Decelerating,
    #[default]
    Holding,
    Accelerating,
}

impl RampDirection {
    pub const fn as_f32(self) -> f32 {
        match self {
            RampDirection::Decelerating => -1.0,
            RampDirection::Holding => 0.0,
            RampDirection::Accelerating => 1.0,
        }
    }
}
