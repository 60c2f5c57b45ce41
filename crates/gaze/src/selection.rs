//! The per-tick selection pass.

use gazecast_math::{Ray, Vector3};
use gazecast_scene::{Face, NodeId, SceneSnapshot};
use serde::Serialize;
use tracing::{debug, trace};

/// The node the gaze ray currently pierces, with its hit distance for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GazeHit {
    /// The selected node.
    pub node: NodeId,
    /// Distance from the ray origin in multiples of the ray direction's
    /// magnitude.
    pub distance: f64,
}

/// A node's local pose captured before ancestor transforms are applied,
/// so descendants can compose against the pre-rotation pivot.
#[derive(Debug, Clone, Copy)]
struct PoseSnapshot {
    origin: Vector3,
    position: Vector3,
    rotation: Vector3,
}

/// Find the nearest interactable face hit by `ray`.
///
/// Walks the snapshot in pre-order. Each node's face is built from its
/// own geometry, its local pose is recorded, and every ancestor's
/// recorded rotation (about that ancestor's origin) and translation are
/// applied in nearest-first order to produce the world pose. Ties on
/// distance go to the first node visited.
pub fn select(ray: &Ray, scene: &SceneSnapshot) -> Option<GazeHit> {
    let mut poses: Vec<Option<PoseSnapshot>> = vec![None; scene.len()];
    let mut best: Option<GazeHit> = None;

    for id in scene.preorder() {
        let geometry = scene.geometry(id);
        let mut face = Face::from_geometry(
            &geometry.rect,
            &geometry.transform,
            &geometry.transform_origin,
            geometry.interactable,
        );
        poses[id.index()] = Some(PoseSnapshot {
            origin: face.origin,
            position: face.position,
            rotation: face.rotation,
        });

        for ancestor in scene.ancestors(id) {
            let pose = poses[ancestor.index()]
                .as_ref()
                .expect("pre-order visits ancestors before descendants");
            face.rotate(pose.rotation, Some(pose.origin));
            face.translate(pose.position);
        }

        if !face.can_interact {
            continue;
        }
        if let Some(distance) = face.intersection_distance(ray) {
            trace!(node = id.index(), distance, "gaze candidate");
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(GazeHit { node: id, distance });
            }
        }
    }

    if let Some(hit) = best {
        debug!(node = hit.node.index(), distance = hit.distance, "gaze hit");
    }
    best
}
