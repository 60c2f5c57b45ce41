//! Pointer-drag rotation accumulator.
//!
//! The event wiring lives outside the core; this just folds the drag
//! deltas it is handed into a camera rotation.

use gazecast_math::Vector3;

/// Accumulates pointer-drag deltas into Euler degrees.
#[derive(Debug, Clone)]
pub struct DragRotation {
    rotation: Vector3,
    sensitivity: f64,
    pitch_limit: f64,
}

impl DragRotation {
    /// `sensitivity` divides raw pixel deltas (larger is slower);
    /// `pitch_limit` clamps pitch to `±limit` degrees so the view cannot
    /// flip over the poles.
    pub fn new(sensitivity: f64, pitch_limit: f64) -> Self {
        Self {
            rotation: Vector3::ZERO,
            sensitivity,
            pitch_limit,
        }
    }

    /// Fold in one drag delta in pixels. Dragging down pitches up the
    /// accumulated x rotation; dragging right yaws it negative.
    pub fn apply(&mut self, dx: f64, dy: f64) {
        self.rotation.x += dy / self.sensitivity;
        self.rotation.y -= dx / self.sensitivity;
        self.rotation.x = self.rotation.x.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// The accumulated rotation in Euler degrees.
    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }
}
