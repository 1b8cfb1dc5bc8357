pub mod aligner;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use aligner::Aligner;
pub use matrix::{compute_matrix, Position, ScoreMatrix};
pub use scoring::ScoringScheme;
pub use traceback::{traceback, AlignmentResult, GAP};
pub use seqmotif_core::AlignmentMode;
