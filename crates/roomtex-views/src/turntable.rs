//! Evenly spaced turntable passes.

use serde::{Deserialize, Serialize};

use roomtex_core::{classify_view, DirectionThresholds, Real};

use crate::order::{alternating_order, reorder};
use crate::{AngularView, ViewRecord, ViewSampler};

/// Configuration for a turntable pass. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurntableOptions {
    /// Number of evenly spaced views around the vertical axis.
    pub count: usize,
    /// Fixed polar angle.
    pub base_theta: Real,
    /// Camera distance from the origin.
    pub radius: Real,
    /// Direction-label thresholds.
    #[serde(default)]
    pub thresholds: DirectionThresholds,
    /// Reorder the generated views with
    /// [`alternating_order`](crate::order::alternating_order) so that
    /// consecutive frames stay geometrically close.
    #[serde(default)]
    pub alternate: bool,
    /// Explicit `(phi, theta)` views placed before the generated pass.
    /// Entries are pushed to the front one at a time, so the last entry
    /// ends up first.
    #[serde(default)]
    pub views_before: Vec<(Real, Real)>,
    /// Explicit `(phi, theta)` views appended after the generated pass.
    #[serde(default)]
    pub views_after: Vec<(Real, Real)>,
}

impl Default for TurntableOptions {
    fn default() -> Self {
        Self {
            count: 8,
            base_theta: 60.0,
            radius: 1.25,
            thresholds: DirectionThresholds::default(),
            alternate: false,
            views_before: Vec::new(),
            views_after: Vec::new(),
        }
    }
}

/// Build one classified view at the given spherical position (angles in
/// degrees).
pub fn circle_view(
    theta_deg: Real,
    phi_deg: Real,
    radius: Real,
    thresholds: &DirectionThresholds,
) -> AngularView {
    let theta = theta_deg.to_radians();
    let phi = phi_deg.to_radians();
    AngularView {
        direction: classify_view(theta, phi, thresholds),
        theta,
        phi,
        radius,
    }
}

/// Turntable strategy: evenly spaced azimuths at fixed elevation, with
/// an optional alternating visit order and explicit leading/trailing
/// views.
///
/// The visit order is materialized at construction; sampling just reads
/// it back.
#[derive(Debug, Clone)]
pub struct TurntableSampler {
    /// Azimuths in degrees, in visit order.
    phis: Vec<Real>,
    /// Polar angles in degrees, in visit order.
    thetas: Vec<Real>,
    radius: Real,
    thresholds: DirectionThresholds,
}

impl TurntableSampler {
    pub fn new(opts: &TurntableOptions) -> Self {
        let mut phis: Vec<Real> = (0..opts.count)
            .map(|index| (index as Real / opts.count as Real) * 360.0)
            .collect();
        let mut thetas: Vec<Real> = vec![opts.base_theta; opts.count];

        if opts.alternate {
            let order = alternating_order(opts.count);
            phis = reorder(&phis, &order);
            thetas = reorder(&thetas, &order);
        }

        for &(phi, theta) in &opts.views_before {
            phis.insert(0, phi);
            thetas.insert(0, theta);
        }
        for &(phi, theta) in &opts.views_after {
            phis.push(phi);
            thetas.push(theta);
        }

        log::debug!("turntable azimuths (degrees): {phis:?}");

        Self {
            phis,
            thetas,
            radius: opts.radius,
            thresholds: opts.thresholds,
        }
    }

    /// Azimuths in visit order, in degrees.
    pub fn phis(&self) -> &[Real] {
        &self.phis
    }

    /// Polar angles in visit order, in degrees.
    pub fn thetas(&self) -> &[Real] {
        &self.thetas
    }
}

impl ViewSampler for TurntableSampler {
    fn len(&self) -> usize {
        self.phis.len()
    }

    fn sample(&mut self, index: usize) -> ViewRecord {
        ViewRecord::Angular(circle_view(
            self.thetas[index],
            self.phis[index],
            self.radius,
            &self.thresholds,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomtex_core::ViewDirection;

    fn angular(record: ViewRecord) -> AngularView {
        match record {
            ViewRecord::Angular(view) => view,
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn four_views_sweep_the_quadrants_in_order() {
        let opts = TurntableOptions {
            count: 4,
            base_theta: 60.0,
            ..Default::default()
        };
        let mut sampler = TurntableSampler::new(&opts);

        assert_eq!(sampler.len(), 4);
        let phis: Vec<Real> = (0..4)
            .map(|i| angular(sampler.sample(i)).phi.to_degrees())
            .collect();
        for (got, want) in phis.iter().zip([0.0, 90.0, 180.0, 270.0]) {
            assert!((got - want).abs() < 1e-9, "phi {got}° != {want}°");
        }

        let theta = angular(sampler.sample(0)).theta;
        assert!((theta - 60.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn alternate_mode_interleaves_the_sweep() {
        let opts = TurntableOptions {
            count: 5,
            alternate: true,
            ..Default::default()
        };
        let sampler = TurntableSampler::new(&opts);

        // Generated azimuths are i/5 * 360°; the alternating order visits
        // indices [0, 1, 3, 2, 4].
        let expected: Vec<Real> = [0, 1, 3, 2, 4]
            .iter()
            .map(|&i| (i as Real / 5.0) * 360.0)
            .collect();
        assert_eq!(sampler.phis(), expected.as_slice());
    }

    #[test]
    fn before_and_after_views_extend_the_pass() {
        let opts = TurntableOptions {
            count: 4,
            views_before: vec![(180.0, 30.0), (180.0, 150.0)],
            views_after: vec![(0.0, 20.0)],
            ..Default::default()
        };
        let mut sampler = TurntableSampler::new(&opts);

        assert_eq!(sampler.len(), 7);
        // Prepends go to the front one at a time: the last listed entry
        // leads the pass.
        let first = angular(sampler.sample(0));
        assert!((first.phi.to_degrees() - 180.0).abs() < 1e-9);
        assert!((first.theta.to_degrees() - 150.0).abs() < 1e-9);

        let last = angular(sampler.sample(6));
        assert!((last.phi.to_degrees()).abs() < 1e-9);
        assert!((last.theta.to_degrees() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn records_carry_direction_labels() {
        let opts = TurntableOptions {
            count: 4,
            base_theta: 60.0,
            ..Default::default()
        };
        let mut sampler = TurntableSampler::new(&opts);

        let directions: Vec<ViewDirection> = (0..4)
            .map(|i| angular(sampler.sample(i)).direction)
            .collect();
        assert_eq!(
            directions,
            vec![
                ViewDirection::Front,
                ViewDirection::Left,
                ViewDirection::Back,
                ViewDirection::Right,
            ]
        );
    }

    #[test]
    fn empty_and_single_counts_are_defined() {
        let empty = TurntableSampler::new(&TurntableOptions {
            count: 0,
            alternate: true,
            ..Default::default()
        });
        assert!(empty.is_empty());

        let mut single = TurntableSampler::new(&TurntableOptions {
            count: 1,
            alternate: true,
            ..Default::default()
        });
        assert_eq!(single.len(), 1);
        assert!(angular(single.sample(0)).phi.abs() < 1e-12);
    }

    #[test]
    fn pass_is_restartable() {
        let mut sampler = TurntableSampler::new(&TurntableOptions {
            count: 3,
            ..Default::default()
        });
        let first: Vec<ViewRecord> = sampler.pass().collect();
        let second: Vec<ViewRecord> = sampler.pass().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
