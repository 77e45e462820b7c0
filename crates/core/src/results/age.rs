use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Age estimation in years.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeResult {
    pub age: Estimate<i32>,
    pub conf: Estimate<f32>,
}

impl fmt::Display for AgeResult {
    // A failed age reading renders as `Age:-`; confidence is still emitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.age.value() {
            Some(age) => write!(f, "Age           Age: {age} Conf: {}", self.conf),
            None => write!(f, "Age           Age:- Conf: {}", self.conf),
        }
    }
}
