use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for log lines.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Identity transform placed at `position`.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Rotate about the local Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_rotation_y(angle)).normalize();
    }
}

/// A mutable position owned by someone else (usually a scene node).
///
/// The motion core only ever reads and writes a position through this trait;
/// it never owns the node.
pub trait PositionHandle {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    /// Add `delta` to the current position.
    fn translate(&mut self, delta: Vec3) {
        let p = self.position();
        self.set_position(p + delta);
    }
}

impl PositionHandle for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl PositionHandle for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }

    fn set_position(&mut self, position: Vec3) {
        *self = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_uniqueness() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn node_id_short_is_eight_chars() {
        assert_eq!(NodeId::new().short().len(), 8);
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn rotate_y_half_turn_faces_negative_z() {
        let mut t = Transform::default();
        t.rotate_y(std::f32::consts::PI);
        let facing = t.rotation * Vec3::Z;
        assert!((facing - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn translate_goes_through_setter() {
        let mut t = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
        t.translate(Vec3::new(0.5, 0.0, -2.0));
        assert_eq!(t.position, Vec3::new(1.5, 0.0, -2.0));

        let mut v = Vec3::ZERO;
        v.translate(Vec3::ONE);
        assert_eq!(v, Vec3::ONE);
    }
}
