//! Input: host key events mapped to per-axis movement intent.
//!
//! # Invariants
//! - Direction changes only on press; release only starts deceleration.
//! - A release for a superseded direction never cancels a newer press.
//! - Events are queued by the host and applied strictly between ticks.

pub mod action;
pub mod bindings;
pub mod queue;
pub mod state;

pub use action::{KeyEvent, MoveKey};
pub use bindings::{BindingError, KeyBindings};
pub use queue::InputQueue;
pub use state::{AxisIntent, InputState};

pub fn crate_info() -> &'static str {
    "drift-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
