//! The greedy sample-elimination driver. Starting from an oversampled scatter
//! of surface points, it repeatedly removes the most crowded point until only
//! `stop` remain, recording the removal order once the active count reaches
//! the requested size. Reversing that order yields a point list whose every
//! prefix is itself evenly spaced, which is what makes the output usable as
//! a nested family of keypoint sets.

use super::queue::CrowdingQueue;
use super::weights::RadiusParams;
use crate::common::kd_tree::KdTree3;
use crate::errors::SamplingError;
use crate::{Point3, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::HashSet;

/// Runs sample elimination over `points` and returns the ordered indices of
/// the `target` selected points.
///
/// The selection is returned as indices into `points`, most essential first:
/// for any `k` between `stop` and `target`, the first `k` indices form an
/// evenly spaced ("Poisson disk") subset on their own. Setting
/// `stop == target` skips the ordering refinement entirely and just reduces
/// the cloud to `target` points.
///
/// The run is deterministic: the same inputs always produce the same output
/// ordering.
///
/// # Arguments
///
/// * `points`: the oversampled point cloud, assumed approximately uniform
///   over a closed surface
/// * `volume`: the volume enclosed by that surface
/// * `target`: the number of points to select
/// * `stop`: the active count at which elimination stops, in `[1, target]`
///
/// returns: Result<Vec<usize>, Box<dyn Error, Global>>
pub fn sample_eliminate(
    points: &[Point3],
    volume: f64,
    target: usize,
    stop: usize,
) -> Result<Vec<usize>> {
    if stop < 1 || stop > target {
        return Err(Box::new(SamplingError::StopOutOfRange));
    }
    if target > points.len() {
        return Err(Box::new(SamplingError::NotEnoughPoints));
    }

    let tree = KdTree3::new(points);
    let mut radii = RadiusParams::compute(points.len(), target, volume);

    let all_indices: Vec<usize> = (0..points.len()).collect();
    let mut queue = CrowdingQueue::from_weights(crowding_pass(points, &tree, &radii, &all_indices, None));

    let mut removed = Vec::new();
    let mut curr_target = target;

    while queue.len() > stop {
        if queue.len() == curr_target {
            // The active count has hit the running target; halve the target
            // and rebuild every weight against the new radius estimate so the
            // ordering statistics stay correct as the set keeps shrinking.
            curr_target /= 2;
            radii = RadiusParams::compute(queue.len(), curr_target, volume);
            debug!(
                "rebuilding crowding weights: active={} target={} rmax={:.6}",
                queue.len(),
                curr_target,
                radii.rmax
            );
            let live = queue.live_indices();
            let survivors: HashSet<usize> = live.iter().copied().collect();
            queue.reload(crowding_pass(points, &tree, &radii, &live, Some(&survivors)));
        }

        let Some((index, _)) = queue.pop() else { break };

        if queue.len() < target {
            // The requested size has been reached; from here on every removal
            // refines the ordering of the kept set and must be recorded.
            removed.push(index);
        }

        // Removing this point relieves the crowding of everything near it
        for (ni, d) in tree.within(&points[index], 2.0 * radii.rmax) {
            if queue.contains(ni) {
                queue.bump(ni, radii.weight(d));
            }
        }
    }

    debug!(
        "sample elimination done: recorded {} removals, {} never eliminated",
        removed.len(),
        queue.len()
    );

    // Last removed is the most structurally essential, so it goes first; the
    // never-eliminated remainder follows in ascending index order.
    removed.reverse();
    removed.extend(queue.live_indices());
    Ok(removed)
}

/// Computes the negated crowding sum for each index in `indices`, restricted
/// to neighbors in `survivors` when given. Each sum is independent, so the
/// scan runs in parallel; note that a point's own zero-distance contribution
/// is part of its sum.
fn crowding_pass(
    points: &[Point3],
    tree: &KdTree3,
    radii: &RadiusParams,
    indices: &[usize],
    survivors: Option<&HashSet<usize>>,
) -> Vec<(usize, f64)> {
    indices
        .par_iter()
        .map(|&i| {
            let sum: f64 = tree
                .within(&points[i], 2.0 * radii.rmax)
                .into_iter()
                .filter(|(ni, _)| survivors.is_none_or(|s| s.contains(ni)))
                .map(|(_, d)| radii.weight(d))
                .sum();
            (i, -sum)
        })
        .collect()
}
