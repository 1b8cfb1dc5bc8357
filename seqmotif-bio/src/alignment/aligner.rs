/// One-call pairwise aligner over a fixed scoring scheme
use crate::alignment::matrix::compute_matrix;
use crate::alignment::scoring::ScoringScheme;
use crate::alignment::traceback::{traceback, AlignmentResult};
use seqmotif_core::config::AlignmentConfig;
use seqmotif_core::{AlignmentMode, SeqmotifResult};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct Aligner {
    scoring: ScoringScheme,
}

impl Aligner {
    pub fn new(scoring: ScoringScheme) -> Self {
        Self { scoring }
    }

    /// Build an aligner from the `[alignment]` config section
    pub fn from_config(config: &AlignmentConfig) -> SeqmotifResult<Self> {
        Ok(Self::new(ScoringScheme::try_from(config)?))
    }

    pub fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    pub fn align(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        mode: AlignmentMode,
    ) -> SeqmotifResult<AlignmentResult> {
        let matrix = compute_matrix(seq1, seq2, &self.scoring, mode)?;
        let result = traceback(&matrix, seq1, seq2, &self.scoring, mode)?;

        debug!(
            mode = %mode,
            seq1_len = seq1.len(),
            seq2_len = seq2.len(),
            score = result.score,
            columns = result.len(),
            "Aligned sequence pair"
        );

        Ok(result)
    }

    /// Needleman-Wunsch alignment of the full sequences
    pub fn global(&self, seq1: &[u8], seq2: &[u8]) -> SeqmotifResult<AlignmentResult> {
        self.align(seq1, seq2, AlignmentMode::Global)
    }

    /// Smith-Waterman alignment of the best-scoring substrings
    pub fn local(&self, seq1: &[u8], seq2: &[u8]) -> SeqmotifResult<AlignmentResult> {
        self.align(seq1, seq2, AlignmentMode::Local)
    }
}
