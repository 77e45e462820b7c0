use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Gender category reported by the estimator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Unknown,
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "-",
            Self::Female => "Female",
            Self::Male => "Male",
        };
        f.write_str(label)
    }
}

/// Gender estimation with confidence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderResult {
    pub gender: Estimate<Gender>,
    pub conf: Estimate<f32>,
}

impl fmt::Display for GenderResult {
    // A failed reading renders through the Unknown label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.gender.value().unwrap_or_default();
        write!(f, "Gender        Gender: {label} Conf: {}", self.conf)
    }
}
