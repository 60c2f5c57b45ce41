//! Per-tick snapshot of the element hierarchy.
//!
//! The core is pull-based: every tick the caller hands it a fresh
//! snapshot of each node's layout rectangle and transform strings. Nodes
//! are addressed by frame-scoped indices, so per-node bookkeeping during
//! a selection pass is a plain indexed array rather than an
//! identity-keyed map.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node's 2D layout rectangle in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutRect {
    /// Offset from the top of the parent coordinate space.
    pub top: f64,
    /// Offset from the left of the parent coordinate space.
    pub left: f64,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
}

/// Everything the selection pass needs to know about one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGeometry {
    /// Layout rectangle.
    pub rect: LayoutRect,
    /// Transform-function string, `matrix(...)` or `matrix3d(...)` shaped.
    pub transform: String,
    /// Transform-origin string, `"<x>px <y>px <z>px"` shaped.
    pub transform_origin: String,
    /// Whether the gaze ray may select this node.
    pub interactable: bool,
    /// Whether dwelling on this node triggers an activation.
    pub activates: bool,
}

impl Default for NodeGeometry {
    fn default() -> Self {
        Self {
            rect: LayoutRect::default(),
            transform: "none".to_owned(),
            transform_origin: "0px 0px 0px".to_owned(),
            interactable: true,
            activates: false,
        }
    }
}

/// Frame-scoped node handle: an index into the snapshot's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The arena slot this id points at.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors building a scene snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// A node referenced a parent id that is not in the snapshot.
    #[error("unknown parent node {0}")]
    UnknownParent(u32),
}

#[derive(Debug)]
struct NodeEntry {
    geometry: NodeGeometry,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The element hierarchy captured for one tick.
///
/// The root (the camera element) is implicit: it owns the top-level nodes
/// but is itself never hit-tested and contributes no transform.
#[derive(Debug, Default)]
pub struct SceneSnapshot {
    nodes: Vec<NodeEntry>,
    roots: Vec<NodeId>,
}

impl SceneSnapshot {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node in document order. `parent` of `None` hangs the node
    /// directly under the implicit root.
    pub fn push_node(
        &mut self,
        parent: Option<NodeId>,
        geometry: NodeGeometry,
    ) -> Result<NodeId, SceneError> {
        if let Some(parent) = parent {
            if parent.index() >= self.nodes.len() {
                return Err(SceneError::UnknownParent(parent.0));
            }
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeEntry {
            geometry,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Number of nodes in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A node's geometry.
    pub fn geometry(&self, id: NodeId) -> &NodeGeometry {
        &self.nodes[id.index()].geometry
    }

    /// A node's parent, `None` for children of the implicit root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    /// All nodes in pre-order (document order), excluding the implicit
    /// root.
    pub fn preorder(&self) -> Preorder<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        Preorder { scene: self, stack }
    }

    /// Walk from a node's parent toward the root, nearest ancestor first.
    /// The implicit root is never yielded.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: self.parent(id),
        }
    }
}

/// Iterator over nodes in pre-order. See [`SceneSnapshot::preorder`].
pub struct Preorder<'a> {
    scene: &'a SceneSnapshot,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = &self.scene.nodes[id.index()].children;
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

/// Iterator over a node's ancestors. See [`SceneSnapshot::ancestors`].
pub struct Ancestors<'a> {
    scene: &'a SceneSnapshot,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.scene.parent(id);
        Some(id)
    }
}
