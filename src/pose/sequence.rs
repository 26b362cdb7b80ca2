use super::Frame;
use crate::common::linear_space;
use crate::{Point3, Result, UnitQuat};
use itertools::Itertools;
use std::ops::Index;

/// Per-parameter value lists for building sequences. Every list defaults to a
/// single entry holding the [`Frame`] default for that parameter, so callers
/// only fill in the parameters they want to vary.
#[derive(Debug, Clone)]
pub struct FrameRanges {
    pub position: Vec<Point3>,
    pub distance: Vec<f64>,
    pub pose: Vec<UnitQuat>,
    pub lighting: Vec<UnitQuat>,
    pub offset: Vec<(f64, f64)>,
    pub background: Vec<UnitQuat>,
}

impl Default for FrameRanges {
    fn default() -> Self {
        let f = Frame::default();
        Self {
            position: vec![f.position],
            distance: vec![f.distance],
            pose: vec![f.pose],
            lighting: vec![f.lighting],
            offset: vec![f.offset],
            background: vec![f.background],
        }
    }
}

impl FrameRanges {
    fn lens(&self) -> [usize; 6] {
        [
            self.position.len(),
            self.distance.len(),
            self.pose.len(),
            self.lighting.len(),
            self.offset.len(),
            self.background.len(),
        ]
    }

    /// Assemble a frame from one index per parameter list, in the same order
    /// as `lens`.
    fn frame_at(&self, idx: [usize; 6]) -> Frame {
        Frame {
            position: self.position[idx[0]],
            distance: self.distance[idx[1]],
            pose: self.pose[idx[2]],
            lighting: self.lighting[idx[3]],
            offset: self.offset[idx[4]],
            background: self.background[idx[5]],
        }
    }
}

/// An ordered list of frames describing the pictures of one rendering run.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub frames: Vec<Frame>,
}

impl Sequence {
    /// Builds a sequence by zipping the parameter lists together, with
    /// broadcasting: a list of length one supplies its value to every frame,
    /// and all longer lists must share a single length.
    pub fn standard(ranges: FrameRanges) -> Result<Self> {
        let lens = ranges.lens();
        if lens.contains(&0) {
            return Err("an empty parameter list was provided".into());
        }
        let count = lens.into_iter().max().unwrap_or(1);
        if lens.iter().any(|&l| l != 1 && l != count) {
            return Err("parameter lists of differing lengths were provided".into());
        }

        let frames = (0..count)
            .map(|i| ranges.frame_at(lens.map(|l| if l == 1 { 0 } else { i })))
            .collect();
        Ok(Self { frames })
    }

    /// Builds a sequence interpolated through a list of waypoint frames.
    /// Segment `i` contributes `counts[i]` frames running from
    /// `waypoints[i]` (inclusive) toward `waypoints[i + 1]` (exclusive), and
    /// the final waypoint is appended at the end, so the total length is
    /// `counts.sum() + 1`.
    pub fn interpolated(waypoints: &[Frame], counts: &[usize]) -> Result<Self> {
        let Some(last) = waypoints.last() else {
            return Err("at least one waypoint is required".into());
        };
        if counts.len() != waypoints.len() - 1 {
            return Err("the length of counts must be one less than the length of waypoints".into());
        }

        let mut frames = Vec::new();
        for ((a, b), &n) in waypoints.iter().zip(&waypoints[1..]).zip(counts) {
            frames.extend(interp(a, b, n, false));
        }
        frames.push(last.clone());
        Ok(Self { frames })
    }

    /// Builds a sequence covering every combination of the parameter lists,
    /// with the later parameters varying fastest.
    pub fn exhaustive(ranges: FrameRanges) -> Self {
        let lens = ranges.lens();
        let frames = lens
            .iter()
            .map(|&l| 0..l)
            .multi_cartesian_product()
            .map(|idx| ranges.frame_at([idx[0], idx[1], idx[2], idx[3], idx[4], idx[5]]))
            .collect();
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl Index<usize> for Sequence {
    type Output = Frame;

    fn index(&self, index: usize) -> &Self::Output {
        &self.frames[index]
    }
}

impl IntoIterator for Sequence {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Interpolates `n` frames between two endpoint frames, lerping the linear
/// parameters and slerping the rotations. With `endpoint` set the last frame
/// is exactly `b`; otherwise the samples stop one step short of it.
pub fn interp(a: &Frame, b: &Frame, n: usize, endpoint: bool) -> Vec<Frame> {
    let ts: Vec<f64> = if endpoint {
        linear_space(0.0, 1.0, n)
    } else {
        (0..n).map(|i| i as f64 / n as f64).collect()
    };

    ts.into_iter()
        .map(|t| Frame {
            position: a.position + (b.position - a.position) * t,
            distance: lerp(a.distance, b.distance, t),
            pose: slerp(&a.pose, &b.pose, t),
            lighting: slerp(&a.lighting, &b.lighting, t),
            offset: (
                lerp(a.offset.0, b.offset.0, t),
                lerp(a.offset.1, b.offset.1, t),
            ),
            background: slerp(&a.background, &b.background, t),
        })
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn slerp(a: &UnitQuat, b: &UnitQuat, t: f64) -> UnitQuat {
    // try_slerp only fails for antipodal rotations, where no unique shortest
    // path exists; snapping to the closer endpoint is as good as any choice.
    a.try_slerp(b, t, 1.0e-9)
        .unwrap_or_else(|| if t < 0.5 { *a } else { *b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn standard_defaults_to_a_single_frame() {
        let seq = Sequence::standard(FrameRanges::default()).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], Frame::default());
    }

    #[test]
    fn standard_varies_one_parameter() {
        let seq = Sequence::standard(FrameRanges {
            distance: vec![1.0, 2.0, 3.0],
            ..FrameRanges::default()
        })
        .unwrap();
        assert_eq!(seq.len(), 3);
        for (frame, expected) in seq.iter().zip([1.0, 2.0, 3.0]) {
            assert_eq!(frame.distance, expected);
            assert_eq!(frame.position, Frame::default().position);
        }
    }

    #[test]
    fn standard_broadcasts_single_entries() {
        let seq = Sequence::standard(FrameRanges {
            position: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(2.0, 2.0, 2.0),
            ],
            distance: vec![7.0],
            offset: vec![(1.0, 1.0)],
            ..FrameRanges::default()
        })
        .unwrap();
        assert_eq!(seq.len(), 3);
        for (i, frame) in seq.iter().enumerate() {
            assert_eq!(frame.position, Point3::new(i as f64, i as f64, i as f64));
            assert_eq!(frame.distance, 7.0);
            assert_eq!(frame.offset, (1.0, 1.0));
        }
    }

    #[test]
    fn standard_rejects_mismatched_lengths() {
        let result = Sequence::standard(FrameRanges {
            distance: vec![1.0, 2.0, 3.0],
            position: vec![Point3::origin(), Point3::origin()],
            ..FrameRanges::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn standard_rejects_empty_lists() {
        let result = Sequence::standard(FrameRanges {
            distance: vec![],
            ..FrameRanges::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn interpolated_length_and_endpoint() {
        let waypoints = Sequence::standard(FrameRanges {
            distance: vec![1.0, 2.0, 3.0],
            ..FrameRanges::default()
        })
        .unwrap();
        let seq = Sequence::interpolated(&waypoints.frames, &[10, 10]).unwrap();
        assert_eq!(seq.len(), 21);
        assert_eq!(seq[0].distance, 1.0);
        assert_eq!(seq[20], waypoints[2]);
        // Segment boundary lands exactly on the middle waypoint
        assert_relative_eq!(seq[10].distance, 2.0);
    }

    #[test]
    fn interpolated_rejects_mismatched_counts() {
        let frames = vec![Frame::default(), Frame::default()];
        assert!(Sequence::interpolated(&frames, &[10, 10]).is_err());
        assert!(Sequence::interpolated(&frames, &[]).is_err());
        assert!(Sequence::interpolated(&[], &[]).is_err());
    }

    #[test]
    fn interp_slerps_rotations() {
        let a = Frame::default();
        let b = Frame {
            pose: UnitQuat::from_axis_angle(&crate::Vector3::z_axis(), PI / 2.0),
            ..Frame::default()
        };
        let frames = interp(&a, &b, 3, true);
        assert_eq!(frames.len(), 3);
        assert_relative_eq!(frames[1].pose.angle(), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(frames[2].pose.angle(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn exhaustive_covers_the_cartesian_product() {
        let seq = Sequence::exhaustive(FrameRanges {
            distance: vec![1.0, 2.0],
            offset: vec![(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)],
            ..FrameRanges::default()
        });
        assert_eq!(seq.len(), 6);

        // Later parameters vary fastest
        assert_eq!(seq[0].distance, 1.0);
        assert_eq!(seq[0].offset, (0.0, 0.0));
        assert_eq!(seq[1].offset, (0.5, 0.5));
        assert_eq!(seq[3].distance, 2.0);
        assert_eq!(seq[3].offset, (0.0, 0.0));
    }

    #[test]
    fn exhaustive_with_defaults_is_one_frame() {
        let seq = Sequence::exhaustive(FrameRanges::default());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], Frame::default());
    }
}
