/// Dynamic-programming score matrix for pairwise alignment
use crate::alignment::scoring::ScoringScheme;
use seqmotif_core::{AlignmentMode, SeqmotifError, SeqmotifResult};

/// Cell coordinates in a score matrix: `i` indexes seq1, `j` indexes seq2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

/// Dense (m+1) x (n+1) grid of cumulative scores, stored row-major.
///
/// Cell (i, j) holds the best score of aligning `seq1[..i]` with `seq2[..j]`
/// (global), or of the best local alignment ending there (local, never
/// below zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
    mode: AlignmentMode,
}

impl ScoreMatrix {
    fn new(rows: usize, cols: usize, mode: AlignmentMode) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
            mode,
        }
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    /// Score at cell (row, col). Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    /// len(seq1) + 1
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// len(seq2) + 1
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    /// Bottom-right cell: the global alignment score
    pub fn final_score(&self) -> i32 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Highest cell, first one in row-major order when several tie
    pub fn max_cell(&self) -> (Position, i32) {
        let mut best = Position { i: 0, j: 0 };
        let mut best_score = self.data[0];

        for (idx, &value) in self.data.iter().enumerate() {
            if value > best_score {
                best_score = value;
                best = Position {
                    i: idx / self.cols,
                    j: idx % self.cols,
                };
            }
        }

        (best, best_score)
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Reject inputs whose cells could leave the `i32` range.
///
/// A cell at (i, j) lies on a path of at most i + j steps, each worth at most
/// the largest score in magnitude.
fn check_score_range(seq1: &[u8], seq2: &[u8], scoring: &ScoringScheme) -> SeqmotifResult<()> {
    let largest = scoring
        .match_score
        .max(scoring.mismatch)
        .max(scoring.indel) as i64;
    let steps = (seq1.len() + seq2.len()) as i64;
    let bound = steps.saturating_mul(largest);

    if bound > i32::MAX as i64 {
        return Err(SeqmotifError::invalid_input(format!(
            "scores up to {} over {}+{} symbols overflow the score matrix",
            largest,
            seq1.len(),
            seq2.len()
        )));
    }
    Ok(())
}

/// Fill the alignment matrix for `seq1` (rows) against `seq2` (columns).
///
/// Equal symbols always extend the diagonal with a match. Otherwise the cell
/// takes the best of a vertical gap, a horizontal gap and a substitution
/// (plus zero in local mode), preferring them in that order on ties.
///
/// Fails with `InvalidInput` when the scores are large enough for some cell
/// to overflow `i32`.
pub fn compute_matrix(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringScheme,
    mode: AlignmentMode,
) -> SeqmotifResult<ScoreMatrix> {
    check_score_range(seq1, seq2, scoring)?;

    let rows = seq1.len() + 1;
    let cols = seq2.len() + 1;
    let mut matrix = ScoreMatrix::new(rows, cols, mode);

    if mode == AlignmentMode::Global {
        for j in 1..cols {
            matrix.set(0, j, -(j as i32) * scoring.indel);
        }
        for i in 1..rows {
            matrix.set(i, 0, -(i as i32) * scoring.indel);
        }
    }

    for i in 1..rows {
        for j in 1..cols {
            let diagonal = matrix.get(i - 1, j - 1);

            let value = if seq1[i - 1] == seq2[j - 1] {
                diagonal + scoring.match_score
            } else {
                let vertical = matrix.get(i - 1, j) - scoring.indel;
                let horizontal = matrix.get(i, j - 1) - scoring.indel;
                let substitution = diagonal - scoring.mismatch;

                // vertical > horizontal > diagonal on ties
                let mut best = vertical;
                if horizontal > best {
                    best = horizontal;
                }
                if substitution > best {
                    best = substitution;
                }
                if mode == AlignmentMode::Local && best < 0 {
                    best = 0;
                }
                best
            };

            matrix.set(i, j, value);
        }
    }

    Ok(matrix)
}
