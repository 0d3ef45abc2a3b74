//! Motion kernel: eased-acceleration ship movement and the per-tick loop.
//!
//! # Invariants
//! - Ramp values stay in [0, 1] on every axis.
//! - A tick only reads input state; input changes land between ticks.
//! - The ship's position is owned by the scene and borrowed per update.

pub mod config;
pub mod easing;
pub mod motion;
pub mod scene;
pub mod session;
pub mod spawner;

pub use config::{ConfigError, GameConfig, MotionConfig, SpawnerConfig};
pub use easing::Easing;
pub use motion::MotionController;
pub use scene::{Scene, SceneError, SceneEvent, SceneNode};
pub use session::{
    MAX_FRAME_DT, MAX_TICKS_PER_FRAME, SHIP_MODEL, SHIP_START, Session, TickReport,
};
pub use spawner::{AsteroidSpawner, SpawnRequest};

pub fn crate_info() -> &'static str {
    "drift-kernel v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("kernel"));
    }
}
