//! Replay of calibrated capture poses.

use std::path::Path;

use roomtex_core::{CameraPose, Mat4, Real, Vec3};

use crate::tables::{load_quaternions, load_translations, TableError};
use crate::{ViewRecord, ViewSampler};

/// Fixed pose replay: the Cartesian product of calibrated camera
/// translations and per-position face quaternions.
///
/// One sample index selects a capture position; the record carries one
/// world-from-camera transform per quaternion (e.g. the six faces of a
/// cubemap capture). Transforms stay in the capture convention; apply
/// [`roomtex_core::opengl_from_capture`] when a rendering-convention
/// frame is needed.
#[derive(Debug, Clone)]
pub struct FixedPoseSampler {
    translations: Vec<Vec3>,
    rotations: Vec<[Real; 4]>,
}

impl FixedPoseSampler {
    /// Load both calibration tables. Missing, malformed, or empty tables
    /// fail here; a constructed sampler cannot fail while sampling.
    pub fn from_files(translations: &Path, rotations: &Path) -> Result<Self, TableError> {
        Ok(Self {
            translations: load_translations(translations)?,
            rotations: load_quaternions(rotations)?,
        })
    }

    /// Build a sampler from in-memory tables (synthetic captures, tests).
    pub fn from_tables(translations: Vec<Vec3>, rotations: Vec<[Real; 4]>) -> Self {
        Self {
            translations,
            rotations,
        }
    }

    /// Number of face quaternions applied at every capture position.
    pub fn rotations_per_position(&self) -> usize {
        self.rotations.len()
    }

    /// World-from-camera transform batch for one capture position.
    pub fn transforms_at(&self, index: usize) -> Vec<Mat4> {
        let translation = self.translations[index];
        self.rotations
            .iter()
            .map(|&rotation| CameraPose::new(translation, rotation).world_from_camera())
            .collect()
    }
}

impl ViewSampler for FixedPoseSampler {
    fn len(&self) -> usize {
        self.translations.len()
    }

    fn sample(&mut self, index: usize) -> ViewRecord {
        ViewRecord::Transforms(self.transforms_at(index))
    }
}
