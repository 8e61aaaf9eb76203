//! Coarse view-direction labels.
//!
//! The diffusion stage keeps one conditioning text embedding per coarse
//! camera direction; [`classify_view`] buckets spherical angles into
//! those labels.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::Real;

/// Coarse bucket for a camera direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewDirection {
    /// Azimuth within the front sector.
    Front,
    /// Left side, between the front sector and the back meridian.
    Left,
    /// Azimuth within the back sector.
    Back,
    /// Right side, past the back sector.
    Right,
    /// Polar angle within the overhead cone.
    Overhead,
    /// Polar angle within the bottom cone.
    Bottom,
}

/// Angular thresholds for [`classify_view`], in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionThresholds {
    /// Half-angle of the overhead and bottom cones around the poles.
    pub overhead: Real,
    /// Width of the front and back azimuth sectors.
    pub front: Real,
}

impl Default for DirectionThresholds {
    fn default() -> Self {
        Self {
            overhead: 30.0_f64.to_radians(),
            front: 60.0_f64.to_radians(),
        }
    }
}

/// Classify spherical angles into a view-direction label.
///
/// Azimuth buckets (phi wrapped into `[0, 2π)`): `[0, front)` front,
/// `[front, π)` left, `[π, π + front)` back, `[π + front, 2π)` right.
/// A polar angle within `overhead` of either pole overrides the azimuth
/// bucket with overhead/bottom.
pub fn classify_view(theta: Real, phi: Real, thresholds: &DirectionThresholds) -> ViewDirection {
    if theta <= thresholds.overhead {
        return ViewDirection::Overhead;
    }
    if theta >= PI - thresholds.overhead {
        return ViewDirection::Bottom;
    }

    let phi = phi.rem_euclid(TAU);
    if phi < thresholds.front {
        ViewDirection::Front
    } else if phi < PI {
        ViewDirection::Left
    } else if phi < PI + thresholds.front {
        ViewDirection::Back
    } else {
        ViewDirection::Right
    }
}
