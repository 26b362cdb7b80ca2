use crate::Result;
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::collections::HashMap;

/// Maps a class name to the label color(s) that mark it in a rendered mask.
/// A class rendered as several colors (separate object parts, for instance)
/// lists all of them.
pub type LabelMap = HashMap<String, Vec<[u8; 3]>>;

/// Renderers tend to dither label colors by a count or two per channel; this
/// cityblock-distance cutoff absorbs that much variation with slack to spare.
pub const DEFAULT_COLOR_CUTOFF: u32 = 6;

/// The inclusive pixel bounds of a labeled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub xmin: u32,
    pub xmax: u32,
    pub ymin: u32,
    pub ymax: u32,
}

impl BoundingBox {
    fn expand_to_contain(&mut self, x: u32, y: u32) {
        self.xmin = self.xmin.min(x);
        self.xmax = self.xmax.max(x);
        self.ymin = self.ymin.min(y);
        self.ymax = self.ymax.max(y);
    }
}

fn class_pixels<'a>(
    mask: &'a RgbImage,
    colors: &'a [[u8; 3]],
) -> impl Iterator<Item = (u32, u32)> + 'a {
    mask.enumerate_pixels()
        .filter(move |(_, _, px)| colors.contains(&px.0))
        .map(|(x, y, _)| (x, y))
}

/// Finds the bounding box of every labeled class present in the mask. A class
/// whose colors never appear is simply absent from the result; the mask is
/// matched against the label colors exactly, so run
/// [`normalize_mask_colors`] first if the renderer's output is noisy.
///
/// # Arguments
///
/// * `mask`: the rendered label mask
/// * `labels`: class names and their label colors
///
/// returns: HashMap<String, BoundingBox, RandomState>
pub fn bounding_boxes_from_mask(mask: &RgbImage, labels: &LabelMap) -> HashMap<String, BoundingBox> {
    let mut result = HashMap::new();
    for (name, colors) in labels {
        let mut bbox: Option<BoundingBox> = None;
        for (x, y) in class_pixels(mask, colors) {
            match &mut bbox {
                Some(b) => b.expand_to_contain(x, y),
                None => {
                    bbox = Some(BoundingBox {
                        xmin: x,
                        xmax: x,
                        ymin: y,
                        ymax: y,
                    })
                }
            }
        }
        if let Some(b) = bbox {
            result.insert(name.clone(), b);
        }
    }
    result
}

/// Finds the centroid of every labeled class present in the mask, as a
/// `(y, x)` pixel coordinate truncated to integers. Absent classes are absent
/// keys, as with [`bounding_boxes_from_mask`].
pub fn centroids_from_mask(mask: &RgbImage, labels: &LabelMap) -> HashMap<String, (u32, u32)> {
    let mut result = HashMap::new();
    for (name, colors) in labels {
        let mut sum_x: u64 = 0;
        let mut sum_y: u64 = 0;
        let mut count: u64 = 0;
        for (x, y) in class_pixels(mask, colors) {
            sum_x += x as u64;
            sum_y += y as u64;
            count += 1;
        }
        if count > 0 {
            result.insert(
                name.clone(),
                (
                    (sum_y as f64 / count as f64) as u32,
                    (sum_x as f64 / count as f64) as u32,
                ),
            );
        }
    }
    result
}

/// Snaps every pixel of a rendered mask onto the palette of intended label
/// colors, eliminating the slight per-pixel color variation some renderers
/// introduce.
///
/// Each pixel must sit within a cityblock distance of strictly less than
/// `cutoff` of exactly one palette color; a pixel matching none of the colors
/// or more than one is an error, since either means the palette and the
/// render disagree.
///
/// # Arguments
///
/// * `mask`: the rendered label mask
/// * `colors`: the intended label colors, including the background
/// * `cutoff`: allowed cityblock distance, e.g. [`DEFAULT_COLOR_CUTOFF`]
///
/// returns: Result<ImageBuffer<Rgb<u8>, Vec<u8>>, Box<dyn Error, Global>>
pub fn normalize_mask_colors(mask: &RgbImage, colors: &[[u8; 3]], cutoff: u32) -> Result<RgbImage> {
    let mut result = RgbImage::new(mask.width(), mask.height());
    for (x, y, px) in mask.enumerate_pixels() {
        let mut matched: Option<[u8; 3]> = None;
        for color in colors {
            let d: u32 = px
                .0
                .iter()
                .zip(color)
                .map(|(a, b)| a.abs_diff(*b) as u32)
                .sum();
            if d < cutoff {
                if matched.is_some() {
                    return Err(format!(
                        "pixel ({}, {}) belongs to more than one label color",
                        x, y
                    )
                    .into());
                }
                matched = Some(*color);
            }
        }
        match matched {
            Some(color) => result.put_pixel(x, y, Rgb(color)),
            None => {
                return Err(
                    format!("pixel ({}, {}) does not belong to any label color", x, y).into(),
                );
            }
        }
    }
    Ok(result)
}
