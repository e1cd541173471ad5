//! Pinhole Rig Library
//!
//! Pinhole camera geometry for multi-camera rigs. This library provides:
//! - an ideal pinhole camera model with scalar and batched
//!   projection/backprojection, visibility predicates and a per-pixel
//!   bearing cache,
//! - measurement containers for visible (pixel, landmark id) observations,
//! - a multi-camera batch projector that projects a shared landmark set into
//!   every camera of every keyframe,
//! - a two-file YAML calibration layout with directory conventions for rigs.
//!
//! Lens distortion is deliberately out of scope: the model is an ideal
//! pinhole.

pub mod camera;
pub mod measurements;
pub mod rig;

// Re-export commonly used types
pub use camera::{CameraModelError, Intrinsics, PinholeCamera, Resolution};
pub use measurements::{CamMeasurements, KeyframeMeasurements, UNSET_TRACK_ID};
pub use rig::{
    CameraRig, KeyframeState, LandmarkMap, PinholeCameraPtr, PinholeCameraVec, PointMap,
};
