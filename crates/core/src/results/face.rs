use std::fmt;

use serde::{Deserialize, Serialize};

use crate::results::age::AgeResult;
use crate::results::blink::BlinkResult;
use crate::results::detection::DetectionResult;
use crate::results::direction::DirectionResult;
use crate::results::expression::ExpressionResult;
use crate::results::gaze::GazeResult;
use crate::results::gender::GenderResult;
use crate::results::recognition::RecognitionResult;

/// Full analysis output for one detected face.
///
/// Composes the general detection record with one optional record per
/// estimator. A sub-result is `None` when that estimator was not run, and
/// fully populated otherwise, never partially filled.
///
/// Rendering emits the base detection line, then one `\t\t`-indented line
/// per populated sub-result in fixed order: direction, age, gender, gaze,
/// blink, expression, recognition. Every line ends with `\n`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceResult {
    pub detection: DetectionResult,
    pub direction: Option<DirectionResult>,
    pub age: Option<AgeResult>,
    pub gender: Option<GenderResult>,
    pub gaze: Option<GazeResult>,
    pub blink: Option<BlinkResult>,
    pub expression: Option<ExpressionResult>,
    pub recognition: Option<RecognitionResult>,
}

impl fmt::Display for FaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.detection)?;
        if let Some(direction) = &self.direction {
            writeln!(f, "\t\t{direction}")?;
        }
        if let Some(age) = &self.age {
            writeln!(f, "\t\t{age}")?;
        }
        if let Some(gender) = &self.gender {
            writeln!(f, "\t\t{gender}")?;
        }
        if let Some(gaze) = &self.gaze {
            writeln!(f, "\t\t{gaze}")?;
        }
        if let Some(blink) = &self.blink {
            writeln!(f, "\t\t{blink}")?;
        }
        if let Some(expression) = &self.expression {
            writeln!(f, "\t\t{expression}")?;
        }
        if let Some(recognition) = &self.recognition {
            writeln!(f, "\t\t{recognition}")?;
        }
        Ok(())
    }
}
