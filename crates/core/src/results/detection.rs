use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// General-purpose detection record: bounding box position, size and
/// confidence.
///
/// Used directly for body and hand detections and embedded as the base of
/// [`FaceResult`](crate::results::face::FaceResult).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    pub pos_x: Estimate<i32>,
    pub pos_y: Estimate<i32>,
    pub size: Estimate<i32>,
    pub conf: Estimate<f32>,
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {} Y: {} Size: {} Conf: {}",
            self.pos_x, self.pos_y, self.size, self.conf
        )
    }
}
