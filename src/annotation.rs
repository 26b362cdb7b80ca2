//! Postprocessing of rendered label masks into annotations: bounding boxes,
//! centroids, and color cleanup. Everything here works on in-memory RGB
//! buffers; reading and writing image files is the caller's concern.

mod mask;

pub use mask::{
    BoundingBox, DEFAULT_COLOR_CUTOFF, LabelMap, bounding_boxes_from_mask, centroids_from_mask,
    normalize_mask_colors,
};
