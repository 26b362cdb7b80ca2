//! Parameterization of synthetic pictures: a [`Frame`] captures the pose
//! parameters of a single rendered image, and a [`Sequence`] builds ordered
//! collections of frames by zipping, interpolating, or exhaustively combining
//! parameter lists. Applying a frame to a host scene and rendering it are the
//! host application's business, not this crate's.

mod frame;
mod sequence;

pub use frame::Frame;
pub use sequence::{FrameRanges, Sequence, interp};
