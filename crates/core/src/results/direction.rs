use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Head-pose estimation: left/right and up/down angles plus roll, in
/// degrees, with the estimator's confidence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionResult {
    pub lr: Estimate<i32>,
    pub ud: Estimate<i32>,
    pub roll: Estimate<i32>,
    pub conf: Estimate<f32>,
}

impl fmt::Display for DirectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Direction     LR: {} UD: {} Roll: {} Conf: {}",
            self.lr, self.ud, self.roll, self.conf
        )
    }
}
