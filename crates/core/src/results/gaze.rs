use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Gaze estimation: left/right and up/down angles in degrees. The engine
/// reports no confidence for gaze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeResult {
    pub gaze_lr: Estimate<i32>,
    pub gaze_ud: Estimate<i32>,
}

impl fmt::Display for GazeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gaze          LR: {} UD: {}", self.gaze_lr, self.gaze_ud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_populated() {
        let gaze = GazeResult {
            gaze_lr: Estimate::Value(-5),
            gaze_ud: Estimate::Value(12),
        };
        assert_eq!(gaze.to_string(), "Gaze          LR: -5 UD: 12");
    }

    #[test]
    fn test_display_default() {
        assert_eq!(GazeResult::default().to_string(), "Gaze          LR: - UD: -");
    }
}
