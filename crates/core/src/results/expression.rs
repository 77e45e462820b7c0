use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Expression category reported by the estimator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    #[default]
    Unknown,
    Neutral,
    Happiness,
    Surprise,
    Anger,
    Sadness,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "-",
            Self::Neutral => "Neutral",
            Self::Happiness => "Happiness",
            Self::Surprise => "Surprise",
            Self::Anger => "Anger",
            Self::Sadness => "Sadness",
        };
        f.write_str(label)
    }
}

/// Expression estimation: five per-emotion scores plus a derived
/// negative/positive scalar.
///
/// When the estimation fails the engine mirrors the failure across all
/// five scores, so the neutral score alone decides whether the record
/// holds usable data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionResult {
    pub neutral: Estimate<f32>,
    pub happiness: Estimate<f32>,
    pub surprise: Estimate<f32>,
    pub anger: Estimate<f32>,
    pub sadness: Estimate<f32>,
    pub neg_pos: Estimate<f32>,
}

impl ExpressionResult {
    /// Highest-scoring emotion and its score. Ties go to the earliest
    /// category in the fixed order neutral, happiness, surprise, anger,
    /// sadness.
    pub fn top1(&self) -> (Expression, Estimate<f32>) {
        let Some(neutral) = self.neutral.value() else {
            return (Expression::Unknown, Estimate::NotPossible);
        };
        let mut best = (Expression::Neutral, neutral);
        let rest = [
            (Expression::Happiness, self.happiness),
            (Expression::Surprise, self.surprise),
            (Expression::Anger, self.anger),
            (Expression::Sadness, self.sadness),
        ];
        for (category, score) in rest {
            if let Some(score) = score.value() {
                if score > best.1 {
                    best = (category, score);
                }
            }
        }
        (best.0, Estimate::Value(best.1))
    }
}

impl fmt::Display for ExpressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neutral.is_not_possible() {
            return f.write_str(
                "Expression    Exp:- Score:- (Neutral:- Happiness:- Surprise:- \
                 Anger:- Sadness:- NegPos:-)",
            );
        }
        let (top, score) = self.top1();
        write!(
            f,
            "Expression    Exp: {top} Score: {score} (Neutral: {} Happiness: {} \
             Surprise: {} Anger: {} Sadness: {} NegPos: {})",
            self.neutral, self.happiness, self.surprise, self.anger, self.sadness, self.neg_pos
        )
    }
}
