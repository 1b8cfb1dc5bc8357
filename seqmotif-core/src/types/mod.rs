//! Core types shared across all seqmotif crates
pub mod aligner;
pub mod motif;

pub use aligner::AlignmentMode;
pub use motif::MotifStrategy;
