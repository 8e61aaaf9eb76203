//! Camera pose representation and rigid-transform conversion.

use nalgebra::{Quaternion, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::{Iso3, Mat4, Real, Vec3};

/// A camera pose as recorded by the capture rig: translation plus
/// orientation quaternion.
///
/// The quaternion is stored scalar-last (`qx, qy, qz, qw`), matching the
/// calibration table layout. It must be non-zero; conversion normalizes
/// it to unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in world coordinates.
    pub translation: Vec3,
    /// Orientation quaternion components `(qx, qy, qz, qw)`.
    pub rotation: [Real; 4],
}

impl CameraPose {
    /// Create a pose from a world translation and a `(qx, qy, qz, qw)`
    /// quaternion.
    pub fn new(translation: Vec3, rotation: [Real; 4]) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Build a pose from a flat `x y z qx qy qz qw` row.
    pub fn from_row(row: [Real; 7]) -> Self {
        Self {
            translation: Vec3::new(row[0], row[1], row[2]),
            rotation: [row[3], row[4], row[5], row[6]],
        }
    }

    /// Unit orientation quaternion (normalizes the stored components).
    pub fn unit_quaternion(&self) -> UnitQuaternion<Real> {
        let [qx, qy, qz, qw] = self.rotation;
        UnitQuaternion::from_quaternion(Quaternion::new(qw, qx, qy, qz))
    }

    /// Rigid world-from-camera transform.
    pub fn isometry(&self) -> Iso3 {
        Iso3::from_parts(Translation3::from(self.translation), self.unit_quaternion())
    }

    /// Homogeneous world-from-camera transform.
    ///
    /// The rotation derived from the quaternion fills the upper-left 3×3
    /// block, the translation fills the last column, and the bottom row
    /// is `(0, 0, 0, 1)`.
    pub fn world_from_camera(&self) -> Mat4 {
        self.isometry().to_homogeneous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mat3;

    fn rotation_block(m: &Mat4) -> Mat3 {
        m.fixed_view::<3, 3>(0, 0).clone_owned()
    }

    #[test]
    fn rotation_block_is_orthonormal_with_unit_determinant() {
        let poses = [
            CameraPose::new(Vec3::new(0.0, 0.0, 0.0), [0.0, 0.0, 0.0, 1.0]),
            CameraPose::new(Vec3::new(-1.0, 0.0, 1.6), [0.0, 0.707107, 0.0, 0.707107]),
            CameraPose::new(Vec3::new(2.0, -1.0, 0.5), [0.5, 0.5, 0.5, 0.5]),
            CameraPose::new(Vec3::new(0.1, 0.2, 0.3), [0.182574, 0.365148, 0.547723, 0.730297]),
        ];

        for pose in poses {
            let m = pose.world_from_camera();
            let r = rotation_block(&m);

            let gram = r.transpose() * r - Mat3::identity();
            assert!(gram.norm() < 1e-5, "not orthonormal: {gram}");
            assert!((r.determinant() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn translation_fills_last_column() {
        let pose = CameraPose::new(Vec3::new(1.0, -2.0, 3.0), [0.0, 0.0, 0.0, 1.0]);
        let m = pose.world_from_camera();

        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], -2.0);
        assert_eq!(m[(2, 3)], 3.0);
        assert_eq!(m[(3, 0)], 0.0);
        assert_eq!(m[(3, 1)], 0.0);
        assert_eq!(m[(3, 2)], 0.0);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn yaw_quarter_turn_matches_hand_computed_rotation() {
        // 90° rotation about +y: camera +z maps to world +x.
        let pose = CameraPose::new(Vec3::new(-1.0, 0.0, 1.6), [0.0, 0.707107, 0.0, 0.707107]);
        let m = pose.world_from_camera();

        let expected = [
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
        ];
        for (r, row) in expected.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert!((m[(r, c)] - value).abs() < 1e-6, "entry ({r}, {c})");
            }
        }
    }

    #[test]
    fn non_unit_quaternion_is_normalized() {
        let scaled = CameraPose::new(Vec3::zeros(), [0.0, 1.4142136, 0.0, 1.4142136]);
        let unit = CameraPose::new(Vec3::zeros(), [0.0, 0.707107, 0.0, 0.707107]);

        let diff = scaled.world_from_camera() - unit.world_from_camera();
        assert!(diff.norm() < 1e-6);
    }
}
