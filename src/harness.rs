//! Headless frame loop: replay scripted input against a scene snapshot
//! and report what the gaze selected.

use crate::script::ScriptedInputPlayer;
use anyhow::{bail, Context, Result};
use gazecast_gaze::{Session, SessionConfig};
use gazecast_math::Vector3;
use gazecast_scene::{LayoutRect, NodeGeometry, NodeId, SceneSnapshot};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

#[derive(Debug, Deserialize)]
struct SceneFile {
    nodes: Vec<SceneFileNode>,
}

#[derive(Debug, Deserialize)]
struct SceneFileNode {
    #[serde(default)]
    label: Option<String>,
    /// Index of the parent node in this file; absent means a child of
    /// the root.
    #[serde(default)]
    parent: Option<usize>,
    rect: LayoutRect,
    #[serde(default = "default_transform")]
    transform: String,
    #[serde(default = "default_transform_origin")]
    transform_origin: String,
    #[serde(default = "default_true")]
    interactable: bool,
    #[serde(default)]
    activates: bool,
}

fn default_transform() -> String {
    "none".to_owned()
}

fn default_transform_origin() -> String {
    "0px 0px 0px".to_owned()
}

fn default_true() -> bool {
    true
}

/// A scene snapshot plus the human-readable node labels from the file.
#[derive(Debug)]
pub struct LoadedScene {
    pub snapshot: SceneSnapshot,
    pub labels: Vec<String>,
}

impl LoadedScene {
    fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }
}

/// Load a scene snapshot from a JSON file.
pub fn load_scene(path: &Path) -> Result<LoadedScene> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading scene file {}", path.display()))?;
    let file: SceneFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing scene file {}", path.display()))?;
    build_scene(file)
}

fn build_scene(file: SceneFile) -> Result<LoadedScene> {
    let mut snapshot = SceneSnapshot::new();
    let mut ids = Vec::with_capacity(file.nodes.len());
    let mut labels = Vec::with_capacity(file.nodes.len());

    for (index, node) in file.nodes.into_iter().enumerate() {
        let parent = match node.parent {
            Some(parent) if parent >= index => {
                bail!("node {index} references parent {parent}, which is not declared before it")
            }
            Some(parent) => Some(ids[parent]),
            None => None,
        };
        let id = snapshot.push_node(
            parent,
            NodeGeometry {
                rect: node.rect,
                transform: node.transform,
                transform_origin: node.transform_origin,
                interactable: node.interactable,
                activates: node.activates,
            },
        )?;
        ids.push(id);
        labels.push(node.label.unwrap_or_else(|| format!("node-{index}")));
    }

    Ok(LoadedScene { snapshot, labels })
}

/// Frame loop settings.
pub struct HarnessOptions {
    pub frames: u64,
    pub dt_ms: f64,
    pub config: SessionConfig,
}

/// One logged selection event.
#[derive(Debug, Serialize, PartialEq)]
pub struct FrameEvent {
    pub frame: u64,
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// What happened on a frame.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The gaze landed on a node.
    Select,
    /// The gaze left every node.
    Clear,
    /// A dwell timer elapsed on the selected node.
    Activate,
}

/// The camera pose at the end of a run.
#[derive(Debug, Serialize)]
pub struct CameraPose {
    pub position: Vector3,
    /// Euler degrees.
    pub rotation: Vector3,
    pub fov: f64,
}

/// Everything a run produced.
#[derive(Debug, Serialize)]
pub struct HarnessReport {
    pub frames: u64,
    pub events: Vec<FrameEvent>,
    pub final_selection: Option<String>,
    pub final_camera: CameraPose,
}

/// Drive a session over the scene for the configured number of frames.
pub fn run(
    scene: &LoadedScene,
    mut script: Option<ScriptedInputPlayer>,
    options: &HarnessOptions,
) -> HarnessReport {
    let mut session = Session::new(&options.config);
    let mut events = Vec::new();
    let mut script_finished = false;

    for frame in 0..options.frames {
        if let Some(player) = script.as_mut() {
            for step in player.advance(options.dt_ms) {
                if step.drag_dx != 0.0 || step.drag_dy != 0.0 {
                    session.pointer_drag(step.drag_dx, step.drag_dy);
                }
                if let Some(sample) = step.orientation {
                    session.orientation_sample(sample);
                }
            }
            if player.is_finished() && !script_finished {
                script_finished = true;
                info!(frame, "input script finished");
            }
        }

        let outcome = session.tick(&scene.snapshot, options.dt_ms);

        if outcome.selection_changed {
            match outcome.hit {
                Some(hit) => {
                    info!(
                        frame,
                        node = scene.label(hit.node),
                        distance = hit.distance,
                        "gaze select"
                    );
                    events.push(FrameEvent {
                        frame,
                        kind: EventKind::Select,
                        node: Some(scene.label(hit.node).to_owned()),
                        distance: Some(hit.distance),
                    });
                }
                None => {
                    info!(frame, "gaze clear");
                    events.push(FrameEvent {
                        frame,
                        kind: EventKind::Clear,
                        node: None,
                        distance: None,
                    });
                }
            }
        }

        if let Some(id) = outcome.activated {
            info!(frame, node = scene.label(id), "dwell activate");
            events.push(FrameEvent {
                frame,
                kind: EventKind::Activate,
                node: Some(scene.label(id).to_owned()),
                distance: None,
            });
        }
    }

    let camera = session.camera();
    HarnessReport {
        frames: options.frames,
        events,
        final_selection: session.selection().map(|id| scene.label(id).to_owned()),
        final_camera: CameraPose {
            position: camera.position,
            rotation: camera.rotation,
            fov: camera.fov,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_json(label: &str, depth: f64, activates: bool) -> serde_json::Value {
        serde_json::json!({
            "label": label,
            "rect": { "top": -50.0, "left": -50.0, "width": 100.0, "height": 100.0 },
            "transform": format!("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, {}, 1)", -depth),
            "activates": activates,
        })
    }

    fn load(value: serde_json::Value) -> Result<LoadedScene> {
        build_scene(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn forward_parent_references_are_rejected() {
        let mut node = panel_json("a", 5.0, false);
        node["parent"] = serde_json::json!(1);
        let err = load(serde_json::json!({ "nodes": [node] })).unwrap_err();
        assert!(err.to_string().contains("parent 1"));
    }

    #[test]
    fn run_reports_selection_and_activation() {
        let scene = load(serde_json::json!({
            "nodes": [panel_json("panel", 5.0, true)]
        }))
        .unwrap();

        let options = HarnessOptions {
            frames: 20,
            dt_ms: 16.0,
            config: SessionConfig {
                hover_activate_ms: 100.0,
                ..SessionConfig::default()
            },
        };
        let report = run(&scene, None, &options);

        assert_eq!(report.final_selection.as_deref(), Some("panel"));
        assert_eq!(report.events[0].kind, EventKind::Select);
        assert_eq!(report.events[0].node.as_deref(), Some("panel"));
        assert!(report
            .events
            .iter()
            .any(|event| event.kind == EventKind::Activate));
    }
}
