use drift_common::{NodeId, Transform};
use drift_input::{InputQueue, InputState, KeyBindings, KeyEvent};
use glam::Vec3;
use std::collections::VecDeque;

use crate::config::{ConfigError, GameConfig};
use crate::motion::MotionController;
use crate::scene::{Scene, SceneEvent};
use crate::spawner::{AsteroidSpawner, SpawnRequest};

/// Model name the player ship is spawned under.
pub const SHIP_MODEL: &str = "ship-fighter-05";

/// Where the ship starts.
pub const SHIP_START: Vec3 = Vec3::new(2.0, 0.0, 0.0);

/// Longest frame time [`Session::run_fixed`] will accept in one call, in seconds.
pub const MAX_FRAME_DT: f64 = 0.25;

/// Most fixed ticks one [`Session::run_fixed`] call will run. Time beyond
/// that is dropped.
pub const MAX_TICKS_PER_FRAME: usize = 16;

/// What one tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub events_applied: usize,
    pub ship_position: Vec3,
    pub spawned: Option<(NodeId, SpawnRequest)>,
    /// Scene changes since the previous tick, oldest first.
    pub scene_events: Vec<SceneEvent>,
}

/// One play session: the scene, the player ship and everything that moves it.
///
/// Per tick, in order: queued key events are applied to [`InputState`], the
/// [`MotionController`] moves the ship, then the [`AsteroidSpawner`] runs.
/// At most `spawner.max_asteroids` asteroids are alive; the oldest is
/// despawned to make room.
pub struct Session {
    scene: Scene,
    bindings: KeyBindings,
    queue: InputQueue,
    input: InputState,
    controller: MotionController,
    spawner: AsteroidSpawner,
    ship: NodeId,
    asteroids: VecDeque<NodeId>,
    max_asteroids: usize,
    tick: u64,
    accumulator: f64,
}

impl Session {
    /// Validate `config`, spawn the ship at [`SHIP_START`] and arm its controller.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let bindings = config.validate()?;

        let mut scene = Scene::new();
        let mut controller = MotionController::new(&config.motion);
        let mut ship_transform = Transform::from_position(SHIP_START);
        controller.setup(&mut ship_transform);
        let ship = scene.spawn(SHIP_MODEL, ship_transform);

        tracing::info!(
            ship = %ship.short(),
            speed = config.motion.speed,
            ramp_rate = config.motion.ramp_rate,
            "session started"
        );

        Ok(Self {
            scene,
            bindings,
            queue: InputQueue::new(),
            input: InputState::new(),
            controller,
            spawner: AsteroidSpawner::new(&config.spawner),
            ship,
            asteroids: VecDeque::new(),
            max_asteroids: config.spawner.max_asteroids,
            tick: 0,
            accumulator: 0.0,
        })
    }

    /// Queue a logical key event for the next tick.
    pub fn push(&mut self, event: KeyEvent) {
        self.queue.push(event);
    }

    /// Queue a host key (e.g. `"w"`, `"ArrowLeft"`). Unbound keys are ignored.
    pub fn push_host(&mut self, host_key: &str, pressed: bool) -> bool {
        self.queue.push_host(&self.bindings, host_key, pressed)
    }

    /// Advance the session by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let events_applied = self.queue.drain_into(&mut self.input);

        match self.scene.get_mut(self.ship) {
            Some(node) => self.controller.update(dt, &self.input, node),
            None => tracing::warn!(ship = %self.ship.short(), "ship node missing, skipping motion"),
        }

        let spawned = self.spawner.update(dt).map(|req| {
            // Placement is left to the host; new asteroids start at the origin.
            let id = self.scene.spawn(req.model_name(), Transform::default());
            self.asteroids.push_back(id);
            (id, req)
        });
        while self.asteroids.len() > self.max_asteroids {
            if let Some(oldest) = self.asteroids.pop_front() {
                self.scene.despawn(oldest);
                tracing::debug!(id = %oldest.short(), "oldest asteroid retired");
            }
        }

        self.tick += 1;
        TickReport {
            tick: self.tick,
            events_applied,
            ship_position: self.ship_position().unwrap_or(Vec3::ZERO),
            spawned,
            scene_events: self.scene.drain_events(),
        }
    }

    /// Feed a variable frame time and run as many fixed `step` ticks as fit.
    /// Leftover time carries into the next frame. Returns the ticks run.
    ///
    /// `frame_dt` is capped at [`MAX_FRAME_DT`] and at most
    /// [`MAX_TICKS_PER_FRAME`] ticks run per call, so a stalled host clock
    /// slows the game down instead of spiralling.
    pub fn run_fixed(&mut self, frame_dt: f32, step: f32) -> usize {
        if !(step.is_finite() && step > 0.0) {
            tracing::warn!(step, "fixed step must be positive");
            return 0;
        }
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += f64::from(frame_dt).min(MAX_FRAME_DT);
        }
        let step_secs = f64::from(step);
        let mut ticks = 0;
        while self.accumulator >= step_secs {
            if ticks == MAX_TICKS_PER_FRAME {
                tracing::warn!(
                    dropped = self.accumulator,
                    "fixed-step budget exhausted, dropping frame time"
                );
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= step_secs;
            self.tick(step);
            ticks += 1;
        }
        ticks
    }

    /// Live asteroid ids, oldest first.
    pub fn asteroids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.asteroids.iter().copied()
    }

    pub fn ship_id(&self) -> NodeId {
        self.ship
    }

    pub fn ship_position(&self) -> Option<Vec3> {
        self.scene.get(self.ship).map(|n| n.transform.position)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn spawner(&self) -> &AsteroidSpawner {
        &self.spawner
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}
