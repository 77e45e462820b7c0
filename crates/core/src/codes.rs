//! Raw code points of the estimation engine's wire protocol.
//!
//! The engine reports categorical results and failed readings as small
//! integers. This module is the only place those codes are interpreted;
//! everything past it works with the typed model. Sentinel codes must stay
//! outside the valid uid/category domains.

use thiserror::Error;

use crate::estimate::Estimate;
use crate::results::expression::Expression;
use crate::results::gender::Gender;
use crate::results::recognition::Identity;

/// Shared "estimation not possible" code, reported by every estimator.
pub const EST_NOT_POSSIBLE: i32 = -128;

pub const GENDER_FEMALE: i32 = 0;
pub const GENDER_MALE: i32 = 1;

pub const EXP_NEUTRAL: i32 = 0;
pub const EXP_HAPPINESS: i32 = 1;
pub const EXP_SURPRISE: i32 = 2;
pub const EXP_ANGER: i32 = 3;
pub const EXP_SADNESS: i32 = 4;

/// Recognition uid when the album holds no registered data.
pub const RECOG_NO_DATA_IN_ALBUM: i32 = -127;
/// Recognition uid when recognition could not be run.
pub const RECOG_NOT_POSSIBLE: i32 = -128;
/// Recognition uid when no album entry matched.
pub const RECOG_UNKNOWN_USER: i32 = -1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodeError {
    #[error("unrecognized gender code {0}")]
    UnknownGenderCode(i32),
    #[error("unrecognized expression code {0}")]
    UnknownExpressionCode(i32),
}

/// Decodes a plain numeric reading, mapping the shared failure code to
/// [`Estimate::NotPossible`].
pub fn reading(raw: i32) -> Estimate<i32> {
    if raw == EST_NOT_POSSIBLE {
        Estimate::NotPossible
    } else {
        Estimate::Value(raw)
    }
}

/// Decodes an engine gender code.
pub fn gender(raw: i32) -> Result<Estimate<Gender>, CodeError> {
    match raw {
        EST_NOT_POSSIBLE => Ok(Estimate::NotPossible),
        GENDER_FEMALE => Ok(Estimate::Value(Gender::Female)),
        GENDER_MALE => Ok(Estimate::Value(Gender::Male)),
        other => Err(CodeError::UnknownGenderCode(other)),
    }
}

/// Decodes an expression category index.
pub fn expression(raw: i32) -> Result<Expression, CodeError> {
    match raw {
        EXP_NEUTRAL => Ok(Expression::Neutral),
        EXP_HAPPINESS => Ok(Expression::Happiness),
        EXP_SURPRISE => Ok(Expression::Surprise),
        EXP_ANGER => Ok(Expression::Anger),
        EXP_SADNESS => Ok(Expression::Sadness),
        other => Err(CodeError::UnknownExpressionCode(other)),
    }
}

/// Decodes a recognition uid. Total: every non-sentinel code is a valid
/// album uid.
pub fn identity(raw: i32) -> Identity {
    match raw {
        RECOG_NO_DATA_IN_ALBUM => Identity::NoAlbumData,
        RECOG_NOT_POSSIBLE => Identity::NotPossible,
        RECOG_UNKNOWN_USER => Identity::Unknown,
        uid => Identity::User(uid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── reading ─────────────────────────────────────────────────────

    #[test]
    fn test_reading_passes_values_through() {
        assert_eq!(reading(34), Estimate::Value(34));
        assert_eq!(reading(0), Estimate::Value(0));
        assert_eq!(reading(-30), Estimate::Value(-30));
    }

    #[test]
    fn test_reading_maps_failure_code() {
        assert!(reading(EST_NOT_POSSIBLE).is_not_possible());
    }

    // ── gender ──────────────────────────────────────────────────────

    #[rstest]
    #[case::female(GENDER_FEMALE, Gender::Female)]
    #[case::male(GENDER_MALE, Gender::Male)]
    fn test_gender_decodes_known_codes(#[case] raw: i32, #[case] expected: Gender) {
        assert_eq!(gender(raw).unwrap(), Estimate::Value(expected));
    }

    #[test]
    fn test_gender_decodes_failure_code() {
        assert_eq!(gender(EST_NOT_POSSIBLE).unwrap(), Estimate::NotPossible);
    }

    #[test]
    fn test_gender_rejects_unknown_code() {
        assert_eq!(gender(7), Err(CodeError::UnknownGenderCode(7)));
    }

    // ── expression ──────────────────────────────────────────────────

    #[rstest]
    #[case::neutral(EXP_NEUTRAL, Expression::Neutral)]
    #[case::happiness(EXP_HAPPINESS, Expression::Happiness)]
    #[case::surprise(EXP_SURPRISE, Expression::Surprise)]
    #[case::anger(EXP_ANGER, Expression::Anger)]
    #[case::sadness(EXP_SADNESS, Expression::Sadness)]
    fn test_expression_decodes_known_codes(#[case] raw: i32, #[case] expected: Expression) {
        assert_eq!(expression(raw).unwrap(), expected);
    }

    #[test]
    fn test_expression_rejects_unknown_code() {
        assert_eq!(expression(5), Err(CodeError::UnknownExpressionCode(5)));
    }

    #[test]
    fn test_code_error_messages() {
        assert_eq!(
            CodeError::UnknownGenderCode(7).to_string(),
            "unrecognized gender code 7"
        );
        assert_eq!(
            CodeError::UnknownExpressionCode(5).to_string(),
            "unrecognized expression code 5"
        );
    }

    // ── identity ────────────────────────────────────────────────────

    #[rstest]
    #[case::no_album_data(RECOG_NO_DATA_IN_ALBUM, Identity::NoAlbumData)]
    #[case::not_possible(RECOG_NOT_POSSIBLE, Identity::NotPossible)]
    #[case::unknown_user(RECOG_UNKNOWN_USER, Identity::Unknown)]
    #[case::valid_uid(3, Identity::User(3))]
    #[case::zero_uid(0, Identity::User(0))]
    fn test_identity_decodes_uid_domain(#[case] raw: i32, #[case] expected: Identity) {
        assert_eq!(identity(raw), expected);
    }
}
