//! Device-orientation angles to camera rotation.

use gazecast_math::{Vector3, DEG_TO_RAD, RAD_TO_DEG};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One raw device-orientation reading, degrees, intrinsic Z-X'-Y''.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    /// Rotation about the screen-normal axis.
    pub alpha: f64,
    /// Front-back tilt.
    pub beta: f64,
    /// Left-right tilt.
    pub gamma: f64,
}

impl OrientationSample {
    /// An all-zero reading means the sensor has nothing to report.
    pub fn is_unavailable(&self) -> bool {
        self.alpha == 0.0 && self.beta == 0.0 && self.gamma == 0.0
    }
}

/// Convert a sample into camera Euler degrees: pitch from elevation, yaw
/// from heading (shifted a quarter turn so heading north faces the
/// scene), roll from tilt.
pub fn camera_rotation(sample: OrientationSample) -> Vector3 {
    let alpha = sample.alpha * DEG_TO_RAD;
    let beta = sample.beta * DEG_TO_RAD;
    let gamma = sample.gamma * DEG_TO_RAD;

    let (sin_a, cos_a) = alpha.sin_cos();
    let (sin_b, cos_b) = beta.sin_cos();
    let (sin_g, cos_g) = gamma.sin_cos();

    let xr_c = cos_b * sin_g;
    let yr_c = -sin_b;
    let zr_a = -sin_a * sin_b * cos_g - cos_a * sin_g;
    let zr_b = cos_a * sin_b * cos_g - sin_a * sin_g;
    let zr_c = cos_b * cos_g;

    // atan covers half the circle; fold the result into a full turn
    // based on which quadrant (zr_a, zr_b) falls in.
    let mut heading = (zr_a / zr_b).atan();
    if zr_b < 0.0 {
        heading += PI;
    } else if zr_a < 0.0 {
        heading += 2.0 * PI;
    }

    let elevation = PI / 2.0 - (-zr_c).acos();

    let tilt_magnitude = (1.0 - zr_c * zr_c).sqrt();
    let tilt = (-xr_c / tilt_magnitude).acos() * sign(yr_c);

    Vector3::new(
        elevation * RAD_TO_DEG,
        heading * RAD_TO_DEG - 90.0,
        tilt * RAD_TO_DEG,
    )
}

/// Three-valued sign: zero input gives zero, so a flat device reads as
/// zero tilt instead of inheriting acos's quarter-turn.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Tracks the camera rotation implied by the latest usable orientation
/// sample.
#[derive(Debug, Clone, Default)]
pub struct OrientationSolver {
    rotation: Vector3,
}

impl OrientationSolver {
    /// A solver with no rotation yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in a sample. An all-zero reading is "sensor unavailable" and
    /// leaves the previous rotation untouched.
    pub fn ingest(&mut self, sample: OrientationSample) {
        if sample.is_unavailable() {
            return;
        }
        self.rotation = camera_rotation(sample);
    }

    /// Camera Euler degrees from the latest usable sample.
    pub fn rotation(&self) -> Vector3 {
        self.rotation
    }
}
