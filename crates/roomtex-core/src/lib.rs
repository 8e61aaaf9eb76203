//! Core pose math for `roomtex`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Mat4`, ...),
//! - camera pose conversion ([`CameraPose`] to a world-from-camera
//!   transform and back to spherical view parameters),
//! - coarse view-direction classification ([`classify_view`]).
//!
//! Pose pipeline:
//! `(x, y, z, qx, qy, qz, qw)` → world-from-camera `Mat4` →
//! OpenGL-convention frame → `(theta, phi, radius, look_at, up)`

/// Coarse view-direction labels and classification.
pub mod direction;
/// Linear algebra type aliases and the boundary tolerance.
pub mod math;
/// Camera pose representation and rigid-transform conversion.
pub mod pose;
/// Spherical view extraction and the rendering-convention adapter.
pub mod spherical;

pub use direction::*;
pub use math::*;
pub use pose::*;
pub use spherical::*;
