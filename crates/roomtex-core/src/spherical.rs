//! Spherical view extraction and the rendering-convention adapter.
//!
//! Splits the conversion from a recorded camera pose to the spherical
//! parameters consumed by the camera generator into three pure steps:
//! angle extraction ([`spherical_angles`]), axis-convention adaptation
//! ([`opengl_from_capture`]), and look-at derivation ([`look_at_point`]).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{CameraPose, Mat4, Pt3, Real, Vec3, Vec4, BOUNDARY_EPS};

/// Fixed world-space up direction for generated cameras. Never rotated
/// into the camera frame.
pub fn world_up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// Spherical angles of a world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    /// Polar angle from the +z pole, in `[0, π]`.
    pub theta: Real,
    /// Azimuth from the +x meridian, in `[0, π]` (acos-based, unsigned).
    pub phi: Real,
    /// Distance from the world origin.
    pub radius: Real,
}

/// Spherical parameterization of a camera pose: angles and radius plus
/// the derived look-at target and up direction, ready for a camera
/// generation routine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalView {
    /// Polar angle in radians.
    pub theta: Real,
    /// Azimuth in radians.
    pub phi: Real,
    /// Distance from the world origin.
    pub radius: Real,
    /// World-space point the camera looks at.
    pub look_at: Pt3,
    /// World-space up direction.
    pub up: Vec3,
}

/// `acos` with the argument snapped to the exact boundary when it sits
/// within [`BOUNDARY_EPS`] of ±1, so float overshoot from upstream
/// arithmetic cannot leave the `acos` domain.
fn clamped_acos(x: Real) -> Real {
    if x > 1.0 - BOUNDARY_EPS {
        0.0
    } else if x < -(1.0 - BOUNDARY_EPS) {
        PI
    } else {
        x.acos()
    }
}

/// Extract spherical angles from a world-space camera position.
///
/// A radius within [`BOUNDARY_EPS`] of zero is the degenerate pole case
/// and yields `theta = phi = 0` exactly; likewise a vanishing in-plane
/// component pins `phi = 0` instead of dividing by zero.
pub fn spherical_angles(position: &Vec3) -> SphericalAngles {
    let radius = position.norm();
    if radius <= BOUNDARY_EPS {
        return SphericalAngles {
            theta: 0.0,
            phi: 0.0,
            radius,
        };
    }

    let theta = clamped_acos(position.z / radius);
    let in_plane = radius * theta.sin();
    let phi = if in_plane < BOUNDARY_EPS {
        0.0
    } else {
        clamped_acos(position.x / in_plane)
    };

    SphericalAngles { theta, phi, radius }
}

/// Adapt a capture-convention world-from-camera transform to an
/// OpenGL-style camera frame by negating the y and z camera axes
/// (columns 1 and 2). Fixed convention adapter, not configurable.
pub fn opengl_from_capture(mut world_from_camera: Mat4) -> Mat4 {
    for col in 1..=2 {
        for row in 0..4 {
            world_from_camera[(row, col)] = -world_from_camera[(row, col)];
        }
    }
    world_from_camera
}

/// World-space point the camera looks at: the fixed camera-frame forward
/// vector `(0, 0, -1, 1)` mapped through `world_from_camera`, with the
/// homogeneous coordinate dropped.
pub fn look_at_point(world_from_camera: &Mat4) -> Pt3 {
    let forward = world_from_camera * Vec4::new(0.0, 0.0, -1.0, 1.0);
    Pt3::new(forward.x, forward.y, forward.z)
}

impl CameraPose {
    /// Spherical view parameters for this pose.
    ///
    /// One-way approximate inverse of spherical camera placement; the
    /// boundary clamps make round-trips inexact near the poles.
    pub fn spherical_view(&self) -> SphericalView {
        let angles = spherical_angles(&self.translation);
        let adapted = opengl_from_capture(self.world_from_camera());

        SphericalView {
            theta: angles.theta,
            phi: angles.phi,
            radius: angles.radius,
            look_at: look_at_point(&adapted),
            up: world_up(),
        }
    }
}
