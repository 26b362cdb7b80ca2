//! The crowding weight scheme used by greedy sample elimination. A point's
//! crowding is the sum of pairwise weights over all points within `2 * rmax`
//! of it, and the point with the largest crowding is always removed first.

pub(crate) const ALPHA: i32 = 8;
pub(crate) const BETA: f64 = 0.65;
pub(crate) const GAMMA: f64 = 1.5;

/// The pair of radii that parameterize the weight function for one stretch of
/// the elimination run. These are recomputed whenever the running target count
/// is lowered, never shared across runs.
#[derive(Debug, Clone, Copy)]
pub struct RadiusParams {
    pub rmax: f64,
    pub rmin: f64,
}

impl RadiusParams {
    /// Derives the radii from the enclosed volume of the sampled surface, the
    /// current target count, and the number of points still active. `rmax` is
    /// the Poisson disk radius an ideal distribution of `target` points would
    /// have in this volume; `rmin` shrinks toward zero as the active count
    /// approaches the target.
    ///
    /// # Arguments
    ///
    /// * `active`: the number of points currently active
    /// * `target`: the count the elimination is currently working toward
    /// * `volume`: the volume enclosed by the sampled surface
    ///
    /// returns: RadiusParams
    pub fn compute(active: usize, target: usize, volume: f64) -> Self {
        let rmax = (volume / (4.0 * 2.0_f64.sqrt() * target as f64)).powf(1.0 / 3.0);
        let rmin = rmax * (1.0 - (target as f64 / active as f64).powf(GAMMA)) * BETA;
        Self { rmax, rmin }
    }

    /// The crowding contribution of a neighbor at distance `d`. The distance
    /// is clamped into `[2 * rmin, 2 * rmax]` before being mapped through the
    /// polynomial falloff, so every neighbor closer than `2 * rmin` weighs the
    /// same and neighbors beyond `2 * rmax` weigh nothing.
    pub fn weight(&self, d: f64) -> f64 {
        let d_hat = if d > 2.0 * self.rmin {
            d.min(2.0 * self.rmax)
        } else {
            2.0 * self.rmin
        };
        (1.0 - d_hat / (2.0 * self.rmax)).powi(ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn rmax_from_unit_sphere_volume() {
        // 100 targets in the volume of a unit sphere
        let volume = 4.0 / 3.0 * std::f64::consts::PI;
        let radii = RadiusParams::compute(1000, 100, volume);
        let expected = (volume / (4.0 * 2.0_f64.sqrt() * 100.0)).powf(1.0 / 3.0);
        assert_relative_eq!(radii.rmax, expected);
        assert!(radii.rmin > 0.0 && radii.rmin < radii.rmax);
    }

    #[test]
    fn rmin_vanishes_when_target_equals_active() {
        let radii = RadiusParams::compute(500, 500, 1.0);
        assert_relative_eq!(radii.rmin, 0.0);
    }

    #[test_case(0.0; "zero distance")]
    #[test_case(0.05; "inside rmin clamp")]
    fn close_neighbors_share_the_clamped_weight(d: f64) {
        let radii = RadiusParams::compute(1000, 100, 4.19);
        let clamped = (1.0 - radii.rmin / radii.rmax).powi(ALPHA);
        assert_relative_eq!(radii.weight(d), clamped);
    }

    #[test]
    fn weight_is_zero_at_and_beyond_two_rmax() {
        let radii = RadiusParams::compute(1000, 100, 4.19);
        assert_relative_eq!(radii.weight(2.0 * radii.rmax), 0.0);
        assert_relative_eq!(radii.weight(10.0 * radii.rmax), 0.0);
    }

    #[test]
    fn weight_decreases_with_distance() {
        let radii = RadiusParams::compute(1000, 100, 4.19);
        let d0 = 2.0 * radii.rmin + 1e-6;
        let samples: Vec<f64> = crate::common::linear_space(d0, 2.0 * radii.rmax, 20)
            .iter()
            .map(|&d| radii.weight(d))
            .collect();
        for pair in samples.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
