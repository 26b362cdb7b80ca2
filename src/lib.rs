use std::error::Error;

pub mod annotation;
pub mod common;
mod errors;
pub mod keypoints;
pub mod pose;
pub mod rotations;

pub use errors::SamplingError;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type UnitVec3 = parry3d_f64::na::Unit<Vector3>;
pub type UnitQuat = parry3d_f64::na::UnitQuaternion<f64>;

pub use common::kd_tree::KdTree3;
pub use keypoints::{KeypointParams, generate_keypoints, sample_eliminate};
pub use pose::{Frame, Sequence};

#[cfg(test)]
mod tests {}
