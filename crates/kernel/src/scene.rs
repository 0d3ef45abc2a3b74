use drift_common::{NodeId, PositionHandle, Transform};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors from scene lookups.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene node {0:?} not found")]
    NodeNotFound(NodeId),
}

/// Structural changes to the scene. Per-tick movement is not logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    Spawned { id: NodeId, name: String },
    Despawned { id: NodeId, name: String },
}

/// A named, positioned object in the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
}

impl PositionHandle for SceneNode {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}

/// In-memory scene graph stand-in: owns every node's transform.
///
/// BTreeMap keeps iteration order stable across runs of the same session.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: BTreeMap<NodeId, SceneNode>,
    events: Vec<SceneEvent>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node and return its id.
    pub fn spawn(&mut self, name: impl Into<String>, transform: Transform) -> NodeId {
        let id = NodeId::new();
        let name = name.into();
        tracing::debug!(id = %id.short(), %name, "node spawned");
        self.events.push(SceneEvent::Spawned {
            id,
            name: name.clone(),
        });
        self.nodes.insert(id, SceneNode { name, transform });
        id
    }

    /// Remove a node. Returns its data if it existed.
    pub fn despawn(&mut self, id: NodeId) -> Option<SceneNode> {
        let node = self.nodes.remove(&id);
        if let Some(ref n) = node {
            self.events.push(SceneEvent::Despawned {
                id,
                name: n.name.clone(),
            });
        }
        node
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Like [`get_mut`](Self::get_mut), but a missing node is an error.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(&id).ok_or(SceneError::NodeNotFound(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    /// Nodes whose name starts with `prefix`.
    pub fn count_named(&self, prefix: &str) -> usize {
        self.nodes
            .values()
            .filter(|n| n.name.starts_with(prefix))
            .count()
    }

    /// Events not yet taken by [`drain_events`](Self::drain_events).
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Take the pending events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }
}
