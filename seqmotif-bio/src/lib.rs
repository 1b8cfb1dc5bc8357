//! Sequence alignment and motif discovery for seqmotif

pub mod alignment;
pub mod motif;

// Re-export commonly used types
pub use alignment::{Aligner, AlignmentResult, ScoringScheme};
pub use motif::{MotifSearch, MotifSearchOutcome, MotifSet, Profile};
