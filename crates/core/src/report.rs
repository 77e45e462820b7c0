use std::fmt;

use serde::{Deserialize, Serialize};

use crate::results::detection::DetectionResult;
use crate::results::face::FaceResult;

/// Everything the engine reported for one frame: body and hand detections
/// (plain detection records) and the per-face analysis results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameReport {
    pub bodies: Vec<DetectionResult>,
    pub hands: Vec<DetectionResult>,
    pub faces: Vec<FaceResult>,
}

impl FrameReport {
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty() && self.hands.is_empty() && self.faces.is_empty()
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Body count: {}", self.bodies.len())?;
        writeln!(f, "Hand count: {}", self.hands.len())?;
        writeln!(f, "Face count: {}", self.faces.len())?;
        for (i, body) in self.bodies.iter().enumerate() {
            writeln!(f, "Body[{i}] {body}")?;
        }
        for (i, hand) in self.hands.iter().enumerate() {
            writeln!(f, "Hand[{i}] {hand}")?;
        }
        for (i, face) in self.faces.iter().enumerate() {
            // Face lines carry their own terminators.
            write!(f, "Face[{i}] {face}")?;
        }
        Ok(())
    }
}
