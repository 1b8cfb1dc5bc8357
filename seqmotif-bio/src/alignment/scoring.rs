/// Flat match/mismatch/indel scoring for pairwise alignment
use seqmotif_core::config::AlignmentConfig;
use seqmotif_core::{SeqmotifError, SeqmotifResult};
use serde::{Deserialize, Serialize};

/// Reward for a match, penalties for a substitution and for a gap.
///
/// All three values are non-negative magnitudes; penalties are subtracted.
/// Has no `Default`; every field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch: i32,
    pub indel: i32,
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, indel: i32) -> SeqmotifResult<Self> {
        let scheme = Self {
            match_score,
            mismatch,
            indel,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    pub fn validate(&self) -> SeqmotifResult<()> {
        if self.match_score < 0 || self.mismatch < 0 || self.indel < 0 {
            return Err(SeqmotifError::invalid_input(format!(
                "scores must be non-negative (match={}, mismatch={}, indel={})",
                self.match_score, self.mismatch, self.indel
            )));
        }
        Ok(())
    }

    /// Score contribution of aligning `a` against `b`
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            -self.mismatch
        }
    }

    /// Score contribution of a single gap column
    #[inline]
    pub fn gap(&self) -> i32 {
        -self.indel
    }
}

impl TryFrom<&AlignmentConfig> for ScoringScheme {
    type Error = SeqmotifError;

    fn try_from(config: &AlignmentConfig) -> Result<Self, Self::Error> {
        Self::new(config.match_score, config.mismatch, config.indel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_and_gap() {
        let scheme = ScoringScheme::new(2, 1, 3).unwrap();
        assert_eq!(scheme.substitution(b'A', b'A'), 2);
        assert_eq!(scheme.substitution(b'A', b'C'), -1);
        assert_eq!(scheme.gap(), -3);
    }

    #[test]
    fn test_negative_scores_rejected() {
        assert!(ScoringScheme::new(-1, 1, 1).is_err());
        assert!(ScoringScheme::new(1, -1, 1).is_err());
        assert!(matches!(
            ScoringScheme::new(1, 1, -1),
            Err(SeqmotifError::InvalidInput(_))
        ));
        assert!(ScoringScheme::new(0, 0, 0).is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = AlignmentConfig {
            match_score: 5,
            mismatch: 4,
            indel: 2,
            ..AlignmentConfig::default()
        };
        let scheme = ScoringScheme::try_from(&config).unwrap();
        assert_eq!(scheme, ScoringScheme { match_score: 5, mismatch: 4, indel: 2 });
    }
}
