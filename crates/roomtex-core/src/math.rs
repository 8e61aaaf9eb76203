//! Mathematical type aliases shared across the workspace.

use nalgebra::{Isometry3, Matrix3, Matrix4, Point2, Point3, Vector3, Vector4};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 4D (homogeneous) vector with [`Real`] components.
pub type Vec4 = Vector4<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
/// 4×4 matrix with [`Real`] entries.
pub type Mat4 = Matrix4<Real>;
/// 3D rigid transform (SE(3)) using [`Real`].
pub type Iso3 = Isometry3<Real>;

/// Tolerance for the boundary clamps in spherical-angle extraction.
///
/// All arithmetic here is `f64`, but the clamp width is the `f32` machine
/// epsilon of the capture pipeline that produced the poses, so positions
/// recorded exactly on a pole still land on the exact boundary angles.
pub const BOUNDARY_EPS: Real = f32::EPSILON as Real;
