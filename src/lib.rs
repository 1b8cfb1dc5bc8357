//! Pairwise sequence alignment and profile-based motif discovery
//!
//! This crate re-exports the workspace members under one name:
//! `seqmotif-core` (configuration, errors, logging) and `seqmotif-bio`
//! (alignment and motif engines).

pub use seqmotif_bio::{alignment, motif};
pub use seqmotif_core::{config, error, logging, types};

pub use seqmotif_bio::{
    Aligner, AlignmentResult, MotifSearch, MotifSearchOutcome, MotifSet, Profile, ScoringScheme,
};
pub use seqmotif_core::{
    init_logging, load_config, save_config, AlignmentMode, Config, MotifStrategy, SeqmotifError,
    SeqmotifResult, VERSION,
};

/// Common imports for embedding the engines
pub mod prelude {
    pub use crate::alignment::{compute_matrix, traceback, Aligner, AlignmentResult, ScoringScheme};
    pub use crate::motif::{
        build_profile, consensus, gibbs_sampling, most_probable_kmer, randomized_motif_search,
        score, MotifSearch, MotifSet,
    };
    pub use crate::{AlignmentMode, Config, MotifStrategy, SeqmotifError, SeqmotifResult};
}
