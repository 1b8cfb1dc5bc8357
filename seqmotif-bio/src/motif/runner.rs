/// Config-driven motif search with restarts and reporting
use crate::motif::motif_set::MotifSet;
use crate::motif::search::{gibbs_sampling_with_restarts, randomized_motif_search_with_restarts};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqmotif_core::config::MotifConfig;
use seqmotif_core::{MotifStrategy, SeqmotifResult};
use serde::Serialize;
use tracing::info;

/// Result of a complete search, with the derived statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifSearchOutcome {
    pub motifs: Vec<String>,
    pub score: usize,
    pub consensus: String,
    pub strategy: MotifStrategy,
}

impl MotifSearchOutcome {
    fn from_set(set: &MotifSet, strategy: MotifStrategy) -> Self {
        Self {
            motifs: set.to_strings(),
            score: set.score(),
            consensus: String::from_utf8_lossy(&set.consensus()).into_owned(),
            strategy,
        }
    }
}

/// Runs the configured strategy with its own RNG.
///
/// A fixed `seed` makes every `run` reproducible across processes; without
/// one the generator is seeded from OS entropy.
pub struct MotifSearch {
    config: MotifConfig,
    rng: StdRng,
}

impl MotifSearch {
    pub fn new(config: MotifConfig) -> SeqmotifResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn with_k(mut self, k: usize) -> SeqmotifResult<Self> {
        self.config.k = k;
        self.config.validate()?;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: MotifStrategy) -> SeqmotifResult<Self> {
        self.config.strategy = strategy;
        self.config.validate()?;
        Ok(self)
    }

    pub fn config(&self) -> &MotifConfig {
        &self.config
    }

    /// Best motif set across all restarts
    pub fn search<S: AsRef<[u8]>>(&mut self, sequences: &[S]) -> SeqmotifResult<MotifSet> {
        let MotifConfig {
            k,
            strategy,
            iterations,
            restarts,
            ..
        } = self.config;

        info!(
            strategy = %strategy,
            k,
            sequences = sequences.len(),
            restarts,
            "Starting motif search"
        );

        let best = match strategy {
            MotifStrategy::Randomized => {
                randomized_motif_search_with_restarts(sequences, k, restarts, &mut self.rng)?
            }
            MotifStrategy::Gibbs => {
                gibbs_sampling_with_restarts(sequences, k, iterations, restarts, &mut self.rng)?
            }
        };

        info!(
            strategy = %strategy,
            score = best.score(),
            consensus = %String::from_utf8_lossy(&best.consensus()),
            "Motif search finished"
        );

        Ok(best)
    }

    pub fn run<S: AsRef<[u8]>>(&mut self, sequences: &[S]) -> SeqmotifResult<MotifSearchOutcome> {
        let best = self.search(sequences)?;
        Ok(MotifSearchOutcome::from_set(&best, self.config.strategy))
    }
}
