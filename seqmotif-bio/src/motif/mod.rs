//! Profile-based motif discovery
pub mod motif_set;
pub mod profile;
pub mod runner;
pub mod search;

pub use motif_set::{consensus, score, MotifSet};
pub use profile::{build_profile, build_profile_with_alphabet, most_probable_kmer, Profile};
pub use runner::{MotifSearch, MotifSearchOutcome};
pub use search::{
    gibbs_sampling, gibbs_sampling_with_restarts, improve_motifs, input_alphabet,
    randomized_motif_search, randomized_motif_search_with_restarts,
};
