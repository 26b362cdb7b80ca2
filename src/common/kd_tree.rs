//! A static nearest-neighbor index over a set of 3D points. The tree is built
//! once from the full point set and never mutated; callers that need to track
//! membership of a shrinking subset do so on their own side and filter the
//! query results.

use crate::Point3;
use kiddo::SquaredEuclidean;
use std::num::NonZero;

type Tree = kiddo::float::kdtree::KdTree<f64, usize, 3, 32, u32>;

pub struct KdTree3 {
    tree: Tree,
}

impl KdTree3 {
    /// Build the index from a slice of points. Each point is identified by its
    /// index in the slice.
    pub fn new(points: &[Point3]) -> Self {
        let mut tree = Tree::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            tree.add(&[p.x, p.y, p.z], i);
        }
        Self { tree }
    }

    /// Every indexed point within `radius` of `point`, paired with its
    /// Euclidean distance to `point`. A query at an indexed point's own
    /// location returns that point with distance zero. The results are in no
    /// particular order.
    pub fn within(&self, point: &Point3, radius: f64) -> Vec<(usize, f64)> {
        self.tree
            .within_unsorted::<SquaredEuclidean>(&[point.x, point.y, point.z], radius * radius)
            .into_iter()
            .map(|n| (n.item, n.distance.sqrt()))
            .collect()
    }

    /// The indexed point closest to `point` and its Euclidean distance.
    pub fn nearest_one(&self, point: &Point3) -> (usize, f64) {
        let n = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[point.x, point.y, point.z]);
        (n.item, n.distance.sqrt())
    }

    /// The `count` indexed points closest to `point`, nearest first, each
    /// paired with its Euclidean distance.
    pub fn nearest(&self, point: &Point3, count: NonZero<usize>) -> Vec<(usize, f64)> {
        self.tree
            .nearest_n::<SquaredEuclidean>(&[point.x, point.y, point.z], count.get())
            .into_iter()
            .map(|n| (n.item, n.distance.sqrt()))
            .collect()
    }
}
