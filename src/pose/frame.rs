use crate::{Point3, UnitQuat};
use serde::{Deserialize, Serialize};

/// The six independent parameters that define a single synthetic picture of
/// an object.
///
/// * `position`: where the object sits in the scene's global frame
/// * `distance`: how far the camera is from the object
/// * `pose`: the object's orientation relative to the camera, i.e. how it
///   will appear oriented in the picture
/// * `lighting`: the direction the light rays arrive from, relative to the
///   camera (identity means light from directly behind the camera)
/// * `offset`: the `(vertical, horizontal)` placement of the object in the
///   picture as fractions of the frame, `(0.5, 0.5)` being centered
/// * `background`: the orientation of the camera-to-object ray in the global
///   frame, which controls what part of the scene shows up behind the object
///
/// The struct is plain data; serialization derives are provided so hosts can
/// dump frame parameters as render metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub position: Point3,
    pub distance: f64,
    pub pose: UnitQuat,
    pub lighting: UnitQuat,
    pub offset: (f64, f64),
    pub background: UnitQuat,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            distance: 100.0,
            pose: UnitQuat::identity(),
            lighting: UnitQuat::identity(),
            offset: (0.5, 0.5),
            background: UnitQuat::identity(),
        }
    }
}
