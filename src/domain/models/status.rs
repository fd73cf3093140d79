use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the most recent fetch attempt.
///
/// Exactly one value is current at any time; each transition is a total
/// replacement, never an accumulation. Every fetch re-enters `Loading`
/// and settles on either `Done` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Error,
    Done,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Error => write!(f, "error"),
            Self::Done => write!(f, "done"),
        }
    }
}
