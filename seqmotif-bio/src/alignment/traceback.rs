/// Traceback through a filled score matrix
use crate::alignment::matrix::{Position, ScoreMatrix};
use crate::alignment::scoring::ScoringScheme;
use seqmotif_core::{AlignmentMode, SeqmotifError, SeqmotifResult};

/// Symbol written opposite a consumed residue when the other side has none
pub const GAP: u8 = b'-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Left,
    Up,
}

/// One optimal alignment of two sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    /// Optimal score: bottom-right cell (global) or matrix maximum (local)
    pub score: i32,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub mode: AlignmentMode,
    /// Matrix cell where the aligned region begins
    pub start: Position,
    /// Matrix cell where the aligned region ends
    pub end: Position,
}

impl AlignmentResult {
    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_seq1
            .iter()
            .copied()
            .zip(self.aligned_seq2.iter().copied())
    }

    pub fn matches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != GAP && b != GAP && a == b)
            .count()
    }

    pub fn mismatches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != GAP && b != GAP && a != b)
            .count()
    }

    pub fn gaps(&self) -> usize {
        self.columns().filter(|&(a, b)| a == GAP || b == GAP).count()
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn midline(&self) -> Vec<u8> {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    b' '
                } else if a == b {
                    b'|'
                } else {
                    b'X'
                }
            })
            .collect()
    }

    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matches() as f64 / self.len() as f64
    }
}

/// Rebuild one optimal alignment from a matrix produced by `compute_matrix`.
///
/// Global alignments run from (m, n) back to (0, 0); local ones start at the
/// first maximal cell and stop at the first zero cell. Equal symbols are
/// always consumed diagonally. Otherwise the walk follows whichever
/// predecessor reproduces the current cell, trying diagonal, then left,
/// then up.
pub fn traceback(
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringScheme,
    mode: AlignmentMode,
) -> SeqmotifResult<AlignmentResult> {
    if matrix.rows() != seq1.len() + 1 || matrix.cols() != seq2.len() + 1 {
        return Err(SeqmotifError::invalid_input(format!(
            "matrix is {}x{} but sequences need {}x{}",
            matrix.rows(),
            matrix.cols(),
            seq1.len() + 1,
            seq2.len() + 1
        )));
    }

    if matrix.mode() != mode {
        return Err(SeqmotifError::invalid_input(format!(
            "matrix was built for {} alignment, traceback requested {}",
            matrix.mode(),
            mode
        )));
    }

    let (end, score) = match mode {
        AlignmentMode::Global => (
            Position {
                i: seq1.len(),
                j: seq2.len(),
            },
            matrix.final_score(),
        ),
        AlignmentMode::Local => matrix.max_cell(),
    };

    let mut aligned_seq1 = Vec::with_capacity(seq1.len() + seq2.len());
    let mut aligned_seq2 = Vec::with_capacity(seq1.len() + seq2.len());
    let (mut i, mut j) = (end.i, end.j);

    loop {
        let done = match mode {
            AlignmentMode::Global => i == 0 && j == 0,
            AlignmentMode::Local => matrix.get(i, j) == 0,
        };
        if done {
            break;
        }

        let step = if i > 0 && j > 0 && seq1[i - 1] == seq2[j - 1] {
            Step::Diagonal
        } else if i == 0 {
            Step::Left
        } else if j == 0 {
            Step::Up
        } else {
            choose_step(matrix, scoring, i, j)?
        };

        match step {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
                aligned_seq1.push(seq1[i]);
                aligned_seq2.push(seq2[j]);
            }
            Step::Left => {
                j -= 1;
                aligned_seq1.push(GAP);
                aligned_seq2.push(seq2[j]);
            }
            Step::Up => {
                i -= 1;
                aligned_seq1.push(seq1[i]);
                aligned_seq2.push(GAP);
            }
        }
    }

    aligned_seq1.reverse();
    aligned_seq2.reverse();

    Ok(AlignmentResult {
        score,
        aligned_seq1,
        aligned_seq2,
        mode,
        start: Position { i, j },
        end,
    })
}

fn choose_step(
    matrix: &ScoreMatrix,
    scoring: &ScoringScheme,
    i: usize,
    j: usize,
) -> SeqmotifResult<Step> {
    // i64: a foreign scheme can push neighbours past the i32 range
    let cell = |row, col| i64::from(matrix.get(row, col));
    let current = cell(i, j);
    let mismatch = i64::from(scoring.mismatch);
    let indel = i64::from(scoring.indel);

    if cell(i - 1, j - 1) - mismatch == current {
        Ok(Step::Diagonal)
    } else if cell(i, j - 1) - indel == current {
        Ok(Step::Left)
    } else if cell(i - 1, j) - indel == current {
        Ok(Step::Up)
    } else {
        // Only reachable with a matrix built under a different scheme
        Err(SeqmotifError::invalid_input(format!(
            "cell ({}, {}) = {} has no predecessor under the given scoring scheme",
            i, j, current
        )))
    }
}
