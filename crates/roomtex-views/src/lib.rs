//! View-sampling strategies for panoramic room texturing.
//!
//! Three strategies share one contract ([`ViewSampler`]):
//! - [`RandomPoseSampler`]: hemisphere-biased random poses for
//!   training-time augmentation,
//! - [`FixedPoseSampler`]: replay of calibrated capture poses
//!   (translation × cubemap-face quaternions),
//! - [`TurntableSampler`]: evenly spaced azimuths at fixed elevation for
//!   multi-view generation and evaluation.
//!
//! A driver iterates one full pass per epoch via [`ViewSampler::pass`],
//! feeding each record to the renderer or diffusion call.

/// Serde-tagged sampler selection.
pub mod config;
/// Visit-order permutation for turntable passes.
pub mod order;
/// Randomized pose sampling.
pub mod random;
/// Replay of calibrated capture poses.
pub mod replay;
/// Whitespace-delimited calibration tables.
pub mod tables;
/// Evenly spaced turntable passes.
pub mod turntable;

pub use config::*;
pub use order::*;
pub use random::*;
pub use replay::*;
pub use tables::*;
pub use turntable::*;

use serde::{Deserialize, Serialize};

use roomtex_core::{Mat4, Real, ViewDirection};

/// One angular camera sample: direction label plus spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularView {
    /// Coarse direction label for conditioning-text selection.
    pub direction: ViewDirection,
    /// Polar angle in radians.
    pub theta: Real,
    /// Azimuth in radians.
    pub phi: Real,
    /// Camera distance from the origin.
    pub radius: Real,
}

/// One step of a sampling pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewRecord {
    /// A single spherical camera sample.
    Angular(AngularView),
    /// A batch of world-from-camera transforms sharing one capture
    /// position.
    Transforms(Vec<Mat4>),
}

/// Common contract for view-sampling strategies.
///
/// A full pass visits `sample(0..len())` in order, single-threaded.
/// Strategies hold no cross-call state beyond construction-time
/// configuration; the random strategy's seeded generator is the one
/// exception, and it advances monotonically.
pub trait ViewSampler: std::fmt::Debug {
    /// Number of samples in one full pass.
    fn len(&self) -> usize;

    /// Whether a pass yields no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce the record for `index` in `[0, len())`.
    fn sample(&mut self, index: usize) -> ViewRecord;

    /// Lazy iterator over one full pass, in index order. Restartable:
    /// call again for a fresh pass.
    fn pass(&mut self) -> Pass<'_, Self>
    where
        Self: Sized,
    {
        Pass {
            sampler: self,
            index: 0,
        }
    }
}

/// Iterator over one pass of a [`ViewSampler`].
pub struct Pass<'a, S: ViewSampler> {
    sampler: &'a mut S,
    index: usize,
}

impl<S: ViewSampler> Iterator for Pass<'_, S> {
    type Item = ViewRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.sampler.len() {
            return None;
        }
        let record = self.sampler.sample(self.index);
        self.index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sampler.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: ViewSampler> ExactSizeIterator for Pass<'_, S> {}
