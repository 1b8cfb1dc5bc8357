//! Aligner type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pairwise alignment variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Needleman-Wunsch: both sequences aligned end to end
    Global,
    /// Smith-Waterman: best-scoring pair of substrings, scores floored at zero
    Local,
}

impl AlignmentMode {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}
