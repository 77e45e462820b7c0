use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::Estimate;

/// Identity outcome of matching a face against the registered album.
///
/// The sentinel outcomes are variants rather than reserved uid values, so
/// they cannot collide with a valid uid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    /// Matched a registered album entry.
    User(i32),
    /// Matched no registered entry.
    Unknown,
    /// Recognition could not be run.
    #[default]
    NotPossible,
    /// The album holds no registered data at all.
    NoAlbumData,
}

/// Recognition result: identity outcome and match score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionResult {
    pub identity: Identity,
    pub score: Estimate<f32>,
}

impl fmt::Display for RecognitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity {
            Identity::NoAlbumData => {
                f.write_str("Recognition   No data is registered in the album.")
            }
            Identity::NotPossible => write!(f, "Recognition   Uid:- Score: {}", self.score),
            Identity::Unknown => write!(f, "Recognition   Uid:Unknown Score: {}", self.score),
            Identity::User(uid) => write!(f, "Recognition   Uid: {uid} Score: {}", self.score),
        }
    }
}
