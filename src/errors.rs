use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure modes of keypoint generation. The argument errors are all detected
/// before any spatial index is built; `UpstreamGeneration` means the surface
/// source handed back fewer points than were asked for.
#[derive(Debug)]
pub enum SamplingError {
    StopOutOfRange,
    OversampleTooSmall,
    NotEnoughPoints,
    UpstreamGeneration,
}

impl Display for SamplingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for SamplingError {}
