use drift_common::{Axis, DirectionSign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logical movement key. Host keys are resolved to these through
/// [`KeyBindings`](crate::KeyBindings); everything downstream sees only these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKey {
    Left,
    Right,
    Forward,
    Backward,
}

impl MoveKey {
    pub const ALL: [MoveKey; 4] = [
        MoveKey::Left,
        MoveKey::Right,
        MoveKey::Forward,
        MoveKey::Backward,
    ];

    /// The axis this key drives.
    pub const fn axis(self) -> Axis {
        match self {
            MoveKey::Left | MoveKey::Right => Axis::Lateral,
            MoveKey::Forward | MoveKey::Backward => Axis::Forward,
        }
    }

    /// The sign this key commands on its axis. Forward is -Z.
    pub const fn sign(self) -> DirectionSign {
        match self {
            MoveKey::Left | MoveKey::Forward => DirectionSign::Negative,
            MoveKey::Right | MoveKey::Backward => DirectionSign::Positive,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MoveKey::Left => "left",
            MoveKey::Right => "right",
            MoveKey::Forward => "forward",
            MoveKey::Backward => "backward",
        }
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveKey::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// An edge-triggered key event, already resolved to a logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(MoveKey),
    Released(MoveKey),
}
