//! High-level entry crate for the `roomtex` view-planning toolbox.
//!
//! `roomtex` produces camera view plans for a panoramic room texturing
//! pipeline: randomized training poses, replay of calibrated capture
//! poses, and evenly spaced turntable passes, together with the pose
//! math that backs them and textured-mesh import.
//!
//! ## Planning a turntable pass
//!
//! ```no_run
//! use roomtex::prelude::*;
//!
//! let opts = TurntableOptions {
//!     count: 8,
//!     alternate: true,
//!     ..Default::default()
//! };
//! let mut sampler = TurntableSampler::new(&opts);
//!
//! for record in sampler.pass() {
//!     if let ViewRecord::Angular(view) = record {
//!         println!("{:?} at phi {:.1}°", view.direction, view.phi.to_degrees());
//!     }
//! }
//! ```
//!
//! ## Replaying a calibrated capture
//!
//! ```no_run
//! use std::path::Path;
//! use roomtex::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut sampler = FixedPoseSampler::from_files(
//!     Path::new("room-1/cam_translations.txt"),
//!     Path::new("room-1/cubemap_rotations.txt"),
//! )?;
//!
//! for index in 0..sampler.len() {
//!     if let ViewRecord::Transforms(batch) = sampler.sample(index) {
//!         // One world-from-camera transform per cubemap face.
//!         assert_eq!(batch.len(), sampler.rotations_per_position());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - **[`core`]**: pose math, spherical extraction, direction labels
//! - **[`views`]**: sampling strategies and calibration tables
//! - **[`mesh`]**: textured-mesh import and normalization
//! - **[`prelude`]**: convenient re-exports for common use cases

/// Pose math, spherical extraction, and direction labels.
pub mod core {
    pub use roomtex_core::*;
}

/// Textured-mesh import and normalization.
pub mod mesh {
    pub use roomtex_mesh::*;
}

/// View-sampling strategies and calibration tables.
pub mod views {
    pub use roomtex_views::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use roomtex::prelude::*;` to get started quickly.
pub mod prelude {
    // Pose math
    pub use crate::core::{
        classify_view, spherical_angles, CameraPose, DirectionThresholds, Iso3, Mat4, Pt3, Real,
        SphericalView, Vec3, ViewDirection,
    };

    // Sampling strategies
    pub use crate::views::{
        alternating_order, rand_modal_pose, rand_pose, AngularView, FixedPoseSampler,
        ModalPoseOptions, RandomPoseOptions, RandomPoseSampler, SamplerConfig, TableError,
        TurntableOptions, TurntableSampler, ViewRecord, ViewSampler,
    };

    // Mesh import
    pub use crate::mesh::{Mesh, MeshError};
}
