pub mod kd_tree;
pub mod points;

pub use kd_tree::KdTree3;

/// Generate a vec of values linearly spaced between `start` and `end`, both
/// inclusive, with a total count of `count`.
///
/// # Arguments
///
/// * `start`: the starting value, inclusive
/// * `end`: the ending value, inclusive
/// * `count`: the total number of evenly spaced values
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use synthkit::common::linear_space;
/// let values = linear_space(0.0, 1.0, 3);
/// assert_eq!(values, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start; count];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}
