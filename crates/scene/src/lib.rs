#![warn(missing_docs)]
//! Scene-side entities for gaze hit testing: posed faces, the camera,
//! and the per-tick snapshot of the element hierarchy.

pub mod camera;
pub mod entity;
pub mod face;
pub mod node;

pub use camera::Camera;
pub use entity::Entity;
pub use face::Face;
pub use node::{LayoutRect, NodeGeometry, NodeId, SceneError, SceneSnapshot};
