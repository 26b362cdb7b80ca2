//! Generation of evenly spaced surface keypoints by weighted sample
//! elimination.
//!
//! An upstream [`SurfaceSource`] produces an oversampled random scatter on an
//! object's surface; [`sample_eliminate`] then greedily removes the most
//! crowded points until the requested count remains. The output ordering
//! carries a stronger guarantee than the count alone: every prefix of the
//! result (down to the configured stopping point) is itself an evenly spaced
//! subset, so a caller can take the first `k` keypoints for any `k` and still
//! get good coverage.

mod eliminate;
mod queue;
mod surface;
mod weights;

pub use eliminate::sample_eliminate;
pub use surface::{MeshSurface, SphereSurface, SurfaceSource};
pub use weights::RadiusParams;

use crate::errors::SamplingError;
use crate::{Point3, Result};
use serde::{Deserialize, Serialize};

/// Tuning knobs for keypoint generation, all with sensible defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeypointParams {
    /// Active count at which elimination stops, in `[1, num]`. The first `k`
    /// output points are evenly spaced for any `k` down to this value; the
    /// default of 1 orders the entire output.
    pub stop: usize,

    /// Ratio of initially generated points to the requested count. Higher
    /// values buy better spacing fidelity with more up-front sampling work.
    pub oversample: f64,

    /// Seed handed to the surface source for the initial random scatter.
    pub seed: u64,
}

impl Default for KeypointParams {
    fn default() -> Self {
        Self {
            stop: 1,
            oversample: 10.0,
            seed: 0,
        }
    }
}

/// Generates `num` evenly spaced keypoints on the surface described by
/// `source`.
///
/// The source is asked for `num * oversample` random surface points, which
/// are then thinned by [`sample_eliminate`]. The returned coordinates are in
/// the source's own frame, ordered so that any prefix of length `k` in
/// `[params.stop, num]` is itself evenly spaced.
///
/// # Arguments
///
/// * `source`: the surface to place keypoints on
/// * `num`: the number of keypoints to generate
/// * `params`: stopping point, oversampling ratio, and random seed
///
/// returns: Result<Vec<OPoint<f64, Const<3>>, Global>, Box<dyn Error, Global>>
pub fn generate_keypoints(
    source: &dyn SurfaceSource,
    num: usize,
    params: &KeypointParams,
) -> Result<Vec<Point3>> {
    if params.stop < 1 || params.stop > num {
        return Err(Box::new(SamplingError::StopOutOfRange));
    }
    if params.oversample < 1.0 {
        return Err(Box::new(SamplingError::OversampleTooSmall));
    }

    let count = (num as f64 * params.oversample) as usize;
    let points = source.sample_surface(count, params.seed)?;
    if points.len() < count {
        return Err(Box::new(SamplingError::UpstreamGeneration));
    }

    let order = sample_eliminate(&points, source.volume(), num, params.stop)?;
    Ok(order.into_iter().map(|i| points[i]).collect())
}
