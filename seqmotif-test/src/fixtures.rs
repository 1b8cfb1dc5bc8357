//! Test fixtures and data generators
//!
//! Everything here is driven by a seeded `StdRng` so fixtures are identical
//! across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by default in tests
pub const TEST_SEED: u64 = 42;

const BASES: [u8; 4] = *b"ACGT";

/// Deterministic RNG for tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random DNA of the given length
pub fn random_dna<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    (0..length).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

/// Copy of `base` with exactly `substitutions` positions changed to a different base
pub fn mutate_sequence<R: Rng + ?Sized>(rng: &mut R, base: &[u8], substitutions: usize) -> Vec<u8> {
    let mut seq = base.to_vec();
    let mut mutated = std::collections::HashSet::new();
    let wanted = substitutions.min(base.len());

    while mutated.len() < wanted {
        let pos = rng.gen_range(0..seq.len());
        if mutated.insert(pos) {
            let current = seq[pos];
            let mut new_base = BASES[rng.gen_range(0..4)];
            while new_base == current {
                new_base = BASES[rng.gen_range(0..4)];
            }
            seq[pos] = new_base;
        }
    }

    seq
}

/// A dataset with one known motif implanted in every sequence
#[derive(Debug, Clone)]
pub struct PlantedMotifs {
    pub motif: Vec<u8>,
    pub sequences: Vec<Vec<u8>>,
    /// Offset of the implant in each sequence
    pub offsets: Vec<usize>,
}

/// Generate `count` random sequences of `length` bases with `motif` implanted
/// verbatim at a random offset in each.
pub fn planted_motif_dataset(
    seed: u64,
    motif: &[u8],
    count: usize,
    length: usize,
) -> PlantedMotifs {
    assert!(motif.len() <= length, "motif longer than sequence");
    let mut rng = seeded_rng(seed);

    let mut sequences = Vec::with_capacity(count);
    let mut offsets = Vec::with_capacity(count);
    for _ in 0..count {
        let mut seq = random_dna(&mut rng, length);
        let offset = rng.gen_range(0..=length - motif.len());
        seq[offset..offset + motif.len()].copy_from_slice(motif);
        sequences.push(seq);
        offsets.push(offset);
    }

    PlantedMotifs {
        motif: motif.to_vec(),
        sequences,
        offsets,
    }
}

/// Small hand-built dataset: `ACGTAC` planted at varying offsets in five
/// 15-base sequences
pub fn small_planted_dataset() -> Vec<Vec<u8>> {
    [
        "GCTAAACGTACAGAC",
        "ACGTACATTAACCTA",
        "ACATAACACGTACCG",
        "TCACGTACAGCCCGA",
        "AACTTTGACGTACTG",
    ]
    .iter()
    .map(|s| s.as_bytes().to_vec())
    .collect()
}
