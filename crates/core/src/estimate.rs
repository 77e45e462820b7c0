use std::fmt;

use serde::{Deserialize, Serialize};

/// A single estimator reading: a concrete value, or the shared
/// "estimation not possible" sentinel.
///
/// `NotPossible` is also the default, so a record field that was never
/// populated renders the same way as a reading the engine failed to
/// produce. In dumps a reading serializes as its bare value, with
/// `NotPossible` as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Estimate<T> {
    Value(T),
    NotPossible,
}

impl<T> Estimate<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotPossible => None,
        }
    }

    pub fn is_not_possible(&self) -> bool {
        matches!(self, Self::NotPossible)
    }
}

impl<T> Default for Estimate<T> {
    fn default() -> Self {
        Self::NotPossible
    }
}

impl<T: fmt::Display> fmt::Display for Estimate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => v.fmt(f),
            Self::NotPossible => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_possible() {
        let reading: Estimate<i32> = Estimate::default();
        assert!(reading.is_not_possible());
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(Estimate::Value(42).value(), Some(42));
        assert_eq!(Estimate::<i32>::NotPossible.value(), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(Estimate::Value(34).to_string(), "34");
        assert_eq!(Estimate::Value(0.87f32).to_string(), "0.87");
    }

    #[test]
    fn test_display_not_possible() {
        assert_eq!(Estimate::<i32>::NotPossible.to_string(), "-");
    }

    #[test]
    fn test_serde_value_is_bare() {
        let json = serde_json::to_string(&Estimate::Value(120)).unwrap();
        assert_eq!(json, "120");
    }

    #[test]
    fn test_serde_not_possible_is_null() {
        let json = serde_json::to_string(&Estimate::<i32>::NotPossible).unwrap();
        assert_eq!(json, "null");
        let back: Estimate<i32> = serde_json::from_str("null").unwrap();
        assert!(back.is_not_possible());
    }
}
