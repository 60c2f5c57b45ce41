//! Caller-owned session state for a running gaze overlay.
//!
//! Everything that persists across frames lives here: the camera pose,
//! the latest orientation- and drag-derived rotations, the current
//! selection, and the pending dwell timer. The caller drives one
//! [`Session::tick`] per frame.

use crate::orientation::{OrientationSample, OrientationSolver};
use crate::pointer::DragRotation;
use crate::selection::{select, GazeHit};
use gazecast_math::Vector3;
use gazecast_scene::{Camera, NodeId, SceneSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables for a session, loaded from the viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Camera field of view in degrees.
    pub fov_degrees: f64,
    /// Eye height above the layout plane, in pixels.
    pub camera_height: f64,
    /// How long a gaze must dwell on an activating node before it fires.
    pub hover_activate_ms: f64,
    /// Divisor applied to raw pointer-drag deltas.
    pub drag_sensitivity: f64,
    /// Pitch clamp for drag rotation, degrees.
    pub pitch_limit_degrees: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: Camera::DEFAULT_FOV,
            camera_height: 0.0,
            hover_activate_ms: 1700.0,
            drag_sensitivity: 5.0,
            pitch_limit_degrees: 90.0,
        }
    }
}

/// What one frame's tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    /// The node the gaze ray currently hits, with its distance.
    pub hit: Option<GazeHit>,
    /// Whether the selection differs from the previous frame.
    pub selection_changed: bool,
    /// A node whose dwell timer elapsed this frame.
    pub activated: Option<NodeId>,
}

/// At most one dwell countdown is ever live; arming replaces any pending
/// one and `cancel` clears it.
#[derive(Debug, Default)]
struct DwellTimer {
    remaining_ms: Option<f64>,
}

impl DwellTimer {
    fn arm(&mut self, duration_ms: f64) {
        self.remaining_ms = Some(duration_ms);
    }

    fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    /// Count down by `dt_ms`; true exactly once, when the countdown
    /// crosses zero.
    fn advance(&mut self, dt_ms: f64) -> bool {
        match self.remaining_ms {
            Some(remaining) => {
                let remaining = remaining - dt_ms;
                if remaining <= 0.0 {
                    self.remaining_ms = None;
                    true
                } else {
                    self.remaining_ms = Some(remaining);
                    false
                }
            }
            None => false,
        }
    }
}

/// A running gaze overlay.
#[derive(Debug)]
pub struct Session {
    camera: Camera,
    orientation: OrientationSolver,
    drag: DragRotation,
    selection: Option<NodeId>,
    dwell: DwellTimer,
    hover_activate_ms: f64,
}

impl Session {
    /// Build a session from its configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let mut camera = Camera::new();
        camera.fov = config.fov_degrees;
        camera.position.y = -config.camera_height;
        Self {
            camera,
            orientation: OrientationSolver::new(),
            drag: DragRotation::new(config.drag_sensitivity, config.pitch_limit_degrees),
            selection: None,
            dwell: DwellTimer::default(),
            hover_activate_ms: config.hover_activate_ms,
        }
    }

    /// The camera as of the last tick.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The node currently gazed at, if any.
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Feed one pointer-drag delta in pixels.
    pub fn pointer_drag(&mut self, dx: f64, dy: f64) {
        self.drag.apply(dx, dy);
    }

    /// Feed one device-orientation sample.
    pub fn orientation_sample(&mut self, sample: OrientationSample) {
        self.orientation.ingest(sample);
    }

    /// Run one frame: finalize the camera rotation from both input
    /// sources, cast the gaze ray, and reconcile the selection.
    ///
    /// The rotation must be final before the ray is built; this ordering
    /// is a correctness requirement, not a convenience.
    pub fn tick(&mut self, scene: &SceneSnapshot, dt_ms: f64) -> TickOutcome {
        self.camera.rotation = self.drag.rotation() + self.orientation.rotation();
        let ray = self.camera.gaze_ray();
        let hit = select(&ray, scene);
        let selected = hit.map(|h| h.node);

        let mut outcome = TickOutcome {
            hit,
            ..TickOutcome::default()
        };

        if selected == self.selection {
            // Unchanged selection: any pending dwell keeps counting.
            if self.dwell.advance(dt_ms) {
                debug!(node = ?self.selection, "dwell activation");
                outcome.activated = self.selection;
            }
            return outcome;
        }

        // The old countdown must die before a new one is armed.
        self.dwell.cancel();
        debug!(from = ?self.selection, to = ?selected, "selection changed");
        self.selection = selected;
        outcome.selection_changed = true;

        if let Some(id) = selected {
            if scene.geometry(id).activates {
                self.dwell.arm(self.hover_activate_ms);
            }
        }
        outcome
    }

    /// Combined drag + orientation rotation in Euler degrees, exposed
    /// for diagnostics.
    pub fn input_rotation(&self) -> Vector3 {
        self.drag.rotation() + self.orientation.rotation()
    }
}
