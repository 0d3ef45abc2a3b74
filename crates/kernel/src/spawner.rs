use serde::{Deserialize, Serialize};

use crate::config::SpawnerConfig;

/// Ask the scene to add one asteroid. Placement is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// Which asteroid model, `0..variant_count`.
    pub variant: u32,
}

impl SpawnRequest {
    /// Model name, e.g. `asteroid-03`.
    pub fn model_name(&self) -> String {
        format!("asteroid-{:02}", self.variant)
    }
}

/// Fixed-interval asteroid spawn timer.
///
/// Counts down by `dt` each tick. When the countdown reaches zero it emits one
/// [`SpawnRequest`] and restarts from the full interval; a single very long
/// tick still fires only once.
#[derive(Debug, Clone)]
pub struct AsteroidSpawner {
    interval: f32,
    variant_count: u32,
    time_to_next: f32,
    rng_state: u64,
    spawned: u64,
}

impl AsteroidSpawner {
    pub fn new(config: &SpawnerConfig) -> Self {
        Self {
            interval: config.interval,
            variant_count: config.variant_count.max(1),
            time_to_next: config.interval,
            rng_state: config.seed,
            spawned: 0,
        }
    }

    pub fn update(&mut self, dt: f32) -> Option<SpawnRequest> {
        if !dt.is_finite() || dt <= 0.0 {
            return None;
        }
        self.time_to_next -= dt;
        if self.time_to_next > 0.0 {
            return None;
        }
        self.time_to_next = self.interval;
        self.spawned += 1;

        let variant = (self.next_random() % u64::from(self.variant_count)) as u32;
        tracing::debug!(variant, total = self.spawned, "asteroid spawn requested");
        Some(SpawnRequest { variant })
    }

    /// Seconds until the next spawn.
    pub fn time_to_next(&self) -> f32 {
        self.time_to_next
    }

    /// Spawn requests emitted so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Splitmix64: deterministic and platform-independent.
    fn next_random(&mut self) -> u64 {
        self.rng_state = self.rng_state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.rng_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}
