//! Motif search type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Motif search heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotifStrategy {
    /// Randomized restart search, iterated to a local optimum
    Randomized,
    /// Gibbs sampling, one held-out sequence per round
    Gibbs,
}

impl fmt::Display for MotifStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Randomized => write!(f, "randomized"),
            Self::Gibbs => write!(f, "gibbs"),
        }
    }
}
