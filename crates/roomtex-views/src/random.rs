//! Randomized camera-pose sampling for training-time augmentation.
//!
//! The hemisphere-biased polar distribution and the fixed 70/30 overhead
//! split deliberately over-sample views near the pole; the text-to-3D
//! objective otherwise sees too many equatorial views.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use roomtex_core::{classify_view, DirectionThresholds, Real};

use crate::{AngularView, ViewRecord, ViewSampler};

/// Configuration for randomized pose sampling. Angle ranges are in
/// degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomPoseOptions {
    /// Camera distance range `(min, max)`.
    pub radius_range: (Real, Real),
    /// Polar angle range; only consulted when `biased_angles` is off.
    pub theta_range: (Real, Real),
    /// Azimuth range.
    pub phi_range: (Real, Real),
    /// Direction-label thresholds.
    #[serde(default)]
    pub thresholds: DirectionThresholds,
    /// Hemisphere-biased polar sampling with the 70/30 overhead split.
    #[serde(default = "default_biased")]
    pub biased_angles: bool,
    /// Random-number generator seed (for reproducibility).
    #[serde(default)]
    pub seed: u64,
}

impl Default for RandomPoseOptions {
    fn default() -> Self {
        Self {
            radius_range: (1.0, 1.5),
            theta_range: (0.0, 150.0),
            phi_range: (0.0, 360.0),
            thresholds: DirectionThresholds::default(),
            biased_angles: true,
            seed: 0,
        }
    }
}

fn default_biased() -> bool {
    true
}

fn uniform_in<R: Rng + ?Sized>(rng: &mut R, range: (Real, Real)) -> Real {
    rng.random::<Real>() * (range.1 - range.0) + range.0
}

/// Draw one random camera pose.
///
/// Radius is uniform in `radius_range` and azimuth uniform in
/// `phi_range` in every branch. With `biased_angles`, 70% of draws take
/// the overhead branch: `theta = acos(1 - u)`, cosine-weighted over the
/// upper hemisphere toward the pole; the remaining 30% mirror the
/// distribution over the lower hemisphere. Without the bias, theta is
/// uniform in `theta_range`.
pub fn rand_pose<R: Rng + ?Sized>(rng: &mut R, opts: &RandomPoseOptions) -> AngularView {
    let radius = uniform_in(rng, opts.radius_range);
    let phi = uniform_in(
        rng,
        (opts.phi_range.0.to_radians(), opts.phi_range.1.to_radians()),
    );

    let theta = if opts.biased_angles {
        let overhead = rng.random::<Real>() > 0.3;
        let x = if overhead {
            1.0 - rng.random::<Real>()
        } else {
            -rng.random::<Real>()
        };
        x.acos()
    } else {
        uniform_in(
            rng,
            (
                opts.theta_range.0.to_radians(),
                opts.theta_range.1.to_radians(),
            ),
        )
    };

    AngularView {
        direction: classify_view(theta, phi, &opts.thresholds),
        theta,
        phi,
        radius,
    }
}

/// Configuration for modal pose sampling. Angle ranges are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalPoseOptions {
    /// Camera distance range `(min, max)`.
    pub radius_range: (Real, Real),
    /// Polar angle range for the cardinal branch.
    pub theta_range: (Real, Real),
    /// Polar angle range for the overhead branch.
    pub theta_range_overhead: (Real, Real),
    /// Azimuth range for the overhead branch.
    pub phi_range: (Real, Real),
    /// Direction-label thresholds.
    #[serde(default)]
    pub thresholds: DirectionThresholds,
}

impl Default for ModalPoseOptions {
    fn default() -> Self {
        Self {
            radius_range: (1.4, 1.6),
            theta_range: (45.0, 90.0),
            theta_range_overhead: (0.0, 20.0),
            phi_range: (0.0, 360.0),
            thresholds: DirectionThresholds::default(),
        }
    }
}

/// Draw one modal camera pose: 15% of draws are overhead views, the rest
/// sit near a cardinal azimuth (0°, 90°, 180°, 270°) with a perturbation
/// of up to 15°.
pub fn rand_modal_pose<R: Rng + ?Sized>(rng: &mut R, opts: &ModalPoseOptions) -> AngularView {
    const CARDINALS_DEG: [Real; 4] = [0.0, 90.0, 180.0, 270.0];
    const PERTURBATION_DEG: Real = 15.0;

    let radius = uniform_in(rng, opts.radius_range);

    let overhead = rng.random::<Real>() > 0.85;
    let (theta, phi) = if overhead {
        let theta = uniform_in(
            rng,
            (
                opts.theta_range_overhead.0.to_radians(),
                opts.theta_range_overhead.1.to_radians(),
            ),
        );
        let phi = uniform_in(
            rng,
            (opts.phi_range.0.to_radians(), opts.phi_range.1.to_radians()),
        );
        (theta, phi)
    } else {
        let cardinal = CARDINALS_DEG[rng.random_range(0..CARDINALS_DEG.len())];
        let phi = cardinal.to_radians() + rng.random::<Real>() * PERTURBATION_DEG.to_radians();
        let theta = uniform_in(
            rng,
            (
                opts.theta_range.0.to_radians(),
                opts.theta_range.1.to_radians(),
            ),
        );
        (theta, phi)
    };

    AngularView {
        direction: classify_view(theta, phi, &opts.thresholds),
        theta,
        phi,
        radius,
    }
}

/// Random pose strategy over the [`ViewSampler`] contract.
///
/// Owns an [`StdRng`] seeded from [`RandomPoseOptions::seed`]; `sample`
/// ignores its index and draws fresh randomness on every call, so a pass
/// of length `size` is `size` independent draws.
#[derive(Debug, Clone)]
pub struct RandomPoseSampler {
    opts: RandomPoseOptions,
    size: usize,
    rng: StdRng,
}

impl RandomPoseSampler {
    /// Create a sampler producing `size` draws per pass.
    pub fn new(opts: RandomPoseOptions, size: usize) -> Self {
        if opts.biased_angles && opts.theta_range != (0.0, 180.0) {
            log::warn!(
                "theta_range {:?} is ignored by hemisphere-biased sampling; the biased branches span (0, 180)",
                opts.theta_range
            );
        }
        let rng = StdRng::seed_from_u64(opts.seed);
        Self { opts, size, rng }
    }

    /// Draw one pose with a caller-supplied generator, leaving the
    /// sampler's own generator untouched.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> AngularView {
        rand_pose(rng, &self.opts)
    }
}

impl ViewSampler for RandomPoseSampler {
    fn len(&self) -> usize {
        self.size
    }

    fn sample(&mut self, _index: usize) -> ViewRecord {
        ViewRecord::Angular(rand_pose(&mut self.rng, &self.opts))
    }
}
