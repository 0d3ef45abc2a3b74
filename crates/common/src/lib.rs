//! Shared value types: scene node ids, transforms, movement axes and signs.
//!
//! # Invariants
//! - Types here carry no behaviour beyond their own arithmetic.
//! - Every type is `Copy` so per-tick code never allocates.

pub mod axis;
pub mod types;

pub use axis::{Axis, DirectionSign, RampDirection};
pub use types::{NodeId, PositionHandle, Transform};
