use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Blink estimation: per-eye openness ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkResult {
    pub ratio_r: Estimate<f32>,
    pub ratio_l: Estimate<f32>,
}

impl fmt::Display for BlinkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blink         R: {} L: {}", self.ratio_r, self.ratio_l)
    }
}
