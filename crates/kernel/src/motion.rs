use drift_common::{Axis, PositionHandle, Transform};
use drift_input::InputState;
use glam::Vec3;
use std::f32::consts::PI;

use crate::config::MotionConfig;
use crate::easing::Easing;

/// Ramp values this close to a bound are snapped onto it, so a key held for
/// `1 / ramp_rate` seconds saturates exactly regardless of step size.
const RAMP_SNAP: f32 = 1e-5;

/// Eased-acceleration motion for one ship.
///
/// Each axis carries a ramp value in [0, 1]. Every tick the ramp moves by
/// `dt * ramp_rate` in the direction the [`InputState`] says, the eased ramp
/// scales `speed * dt`, and the result is signed by the commanded direction
/// and added to the ship's position.
///
/// The controller never owns the ship. It borrows the position for the
/// duration of [`update`](Self::update) only.
#[derive(Debug, Clone)]
pub struct MotionController {
    speed: f32,
    ramp_rate: f32,
    easing: Easing,
    ramps: [f32; 2],
    last_velocity: Vec3,
    ready: bool,
}

impl MotionController {
    /// A controller with zeroed ramps. Call [`setup`](Self::setup) before the first update.
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            speed: config.speed,
            ramp_rate: config.ramp_rate,
            easing: config.easing,
            ramps: [0.0; 2],
            last_velocity: Vec3::ZERO,
            ready: false,
        }
    }

    /// One-time ship setup: turn the model to face -Z and arm the controller.
    /// Until this runs, [`update`](Self::update) does nothing.
    pub fn setup(&mut self, ship: &mut Transform) {
        if self.ready {
            tracing::warn!("motion controller setup called twice, ignoring");
            return;
        }
        ship.rotate_y(PI);
        self.ready = true;
        tracing::debug!(
            speed = self.speed,
            ramp_rate = self.ramp_rate,
            easing = ?self.easing,
            "motion controller ready"
        );
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Advance one tick and move `ship`.
    pub fn update<P: PositionHandle + ?Sized>(&mut self, dt: f32, input: &InputState, ship: &mut P) {
        if !self.ready {
            return;
        }
        let dt = sanitize_dt(dt);

        let mut velocity = Vec3::ZERO;
        for axis in Axis::ALL {
            let intent = input.axis(axis);
            let ramp = &mut self.ramps[axis.index()];
            *ramp = step_ramp(*ramp, dt * intent.ramp.as_f32() * self.ramp_rate);

            let accel = self.easing.apply(*ramp);
            let effective = accel * self.speed * dt;
            velocity += axis.unit() * (intent.sign.as_f32() * effective);
        }

        ship.translate(velocity);
        self.last_velocity = velocity;
    }

    /// Current ramp progress on `axis`.
    pub fn ramp(&self, axis: Axis) -> f32 {
        self.ramps[axis.index()]
    }

    /// Eased acceleration factor on `axis`.
    pub fn acceleration(&self, axis: Axis) -> f32 {
        self.easing.apply(self.ramp(axis))
    }

    /// Displacement applied by the most recent update.
    pub fn last_velocity(&self) -> Vec3 {
        self.last_velocity
    }

    /// Whether the last update displaced the ship at all.
    pub fn is_moving(&self) -> bool {
        self.last_velocity != Vec3::ZERO
    }
}

fn step_ramp(ramp: f32, delta: f32) -> f32 {
    let r = (ramp + delta).clamp(0.0, 1.0);
    if r >= 1.0 - RAMP_SNAP {
        1.0
    } else if r <= RAMP_SNAP {
        0.0
    } else {
        r
    }
}

/// Clock anomalies (negative, NaN, infinite) become a zero-length tick.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        tracing::warn!(dt, "bad frame delta, treating as zero");
        0.0
    }
}
