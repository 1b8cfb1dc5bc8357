//! Randomized and Gibbs-sampling motif search

use crate::motif::motif_set::MotifSet;
use crate::motif::profile::{build_profile_with_alphabet, most_probable_kmer};
use rand::Rng;
use seqmotif_core::{SeqmotifError, SeqmotifResult};
use std::collections::BTreeSet;
use tracing::debug;

/// Distinct symbols across `sequences`, ascending
pub fn input_alphabet<S: AsRef<[u8]>>(sequences: &[S]) -> Vec<u8> {
    let symbols: BTreeSet<u8> = sequences
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .collect();
    symbols.into_iter().collect()
}

/// Shortest sequence length, after checking the shared search preconditions
fn check_search_input<S: AsRef<[u8]>>(sequences: &[S], k: usize) -> SeqmotifResult<usize> {
    if sequences.is_empty() {
        return Err(SeqmotifError::invalid_input("no sequences to search"));
    }
    if k == 0 {
        return Err(SeqmotifError::invalid_input("motif width k must be positive"));
    }

    let min_len = sequences
        .iter()
        .map(|s| s.as_ref().len())
        .min()
        .unwrap_or(0);
    if k > min_len {
        return Err(SeqmotifError::invalid_input(format!(
            "k={} exceeds the shortest sequence length {}",
            k, min_len
        )));
    }

    Ok(min_len)
}

fn check_restarts(restarts: usize) -> SeqmotifResult<()> {
    if restarts == 0 {
        return Err(SeqmotifError::invalid_input("restarts must be positive"));
    }
    Ok(())
}

/// k-windows of every sequence at one shared random offset
fn seed_motifs<S, R>(
    sequences: &[S],
    k: usize,
    min_len: usize,
    rng: &mut R,
) -> SeqmotifResult<MotifSet>
where
    S: AsRef<[u8]>,
    R: Rng + ?Sized,
{
    let offset = rng.gen_range(0..=min_len - k);
    let motifs = sequences
        .iter()
        .map(|s| s.as_ref()[offset..offset + k].to_vec())
        .collect();
    MotifSet::new(motifs)
}

/// One improvement step of randomized search.
///
/// Profiles `motifs` over `alphabet` and takes every sequence's most
/// probable k-mer. Returns that candidate if it scores strictly lower,
/// otherwise `motifs` unchanged, so a local optimum maps to itself.
pub fn improve_motifs<S: AsRef<[u8]>>(
    sequences: &[S],
    motifs: &MotifSet,
    alphabet: &[u8],
) -> SeqmotifResult<MotifSet> {
    if sequences.len() != motifs.len() {
        return Err(SeqmotifError::invalid_input(format!(
            "{} motifs for {} sequences",
            motifs.len(),
            sequences.len()
        )));
    }

    let k = motifs.k();
    let profile = build_profile_with_alphabet(motifs, k, alphabet)?;
    let candidate = sequences
        .iter()
        .map(|s| most_probable_kmer(s.as_ref(), k, &profile))
        .collect::<SeqmotifResult<Vec<_>>>()?;
    let candidate = MotifSet::new(candidate)?;

    if candidate.score() < motifs.score() {
        Ok(candidate)
    } else {
        Ok(motifs.clone())
    }
}

/// A single randomized motif search run.
///
/// Seeds every sequence at the same random offset, then applies
/// [`improve_motifs`] until the score stops decreasing.
pub fn randomized_motif_search<S, R>(
    sequences: &[S],
    k: usize,
    rng: &mut R,
) -> SeqmotifResult<MotifSet>
where
    S: AsRef<[u8]>,
    R: Rng + ?Sized,
{
    let min_len = check_search_input(sequences, k)?;
    let alphabet = input_alphabet(sequences);
    let mut current = seed_motifs(sequences, k, min_len, rng)?;

    loop {
        let candidate = improve_motifs(sequences, &current, &alphabet)?;
        if candidate.score() >= current.score() {
            return Ok(current);
        }
        debug!(
            from = current.score(),
            to = candidate.score(),
            "Randomized search improved motifs"
        );
        current = candidate;
    }
}

/// Best of `restarts` independent randomized searches; the earliest run
/// wins among equal scores.
pub fn randomized_motif_search_with_restarts<S, R>(
    sequences: &[S],
    k: usize,
    restarts: usize,
    rng: &mut R,
) -> SeqmotifResult<MotifSet>
where
    S: AsRef<[u8]>,
    R: Rng + ?Sized,
{
    check_restarts(restarts)?;
    check_search_input(sequences, k)?;

    let mut best: Option<MotifSet> = None;
    for _ in 0..restarts {
        let run = randomized_motif_search(sequences, k, &mut *rng)?;
        if best.as_ref().map_or(true, |b| run.score() < b.score()) {
            best = Some(run);
        }
    }

    best.ok_or_else(|| SeqmotifError::invalid_input("restarts must be positive"))
}

/// Gibbs sampling over `iterations` rounds.
///
/// Each round holds out one random sequence, profiles the remaining motifs
/// and swaps in the held-out sequence's most probable k-mer when that lowers
/// the score. Every round runs; the returned set is the best one seen.
pub fn gibbs_sampling<S, R>(
    sequences: &[S],
    k: usize,
    iterations: usize,
    rng: &mut R,
) -> SeqmotifResult<MotifSet>
where
    S: AsRef<[u8]>,
    R: Rng + ?Sized,
{
    let min_len = check_search_input(sequences, k)?;
    if iterations == 0 {
        return Err(SeqmotifError::invalid_input("iterations must be positive"));
    }

    let alphabet = input_alphabet(sequences);
    let t = sequences.len();
    let mut current = seed_motifs(sequences, k, min_len, &mut *rng)?;

    for round in 0..iterations {
        let held_out = rng.gen_range(0..t);
        let others: Vec<&[u8]> = current
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != held_out)
            .map(|(_, m)| m.as_slice())
            .collect();

        let profile = build_profile_with_alphabet(&others, k, &alphabet)?;
        let replacement = most_probable_kmer(sequences[held_out].as_ref(), k, &profile)?;

        let mut motifs = current.to_vec();
        motifs[held_out] = replacement;
        let candidate = MotifSet::new(motifs)?;

        if candidate.score() < current.score() {
            debug!(
                round,
                held_out,
                from = current.score(),
                to = candidate.score(),
                "Gibbs sampling improved motifs"
            );
            current = candidate;
        }
    }

    Ok(current)
}

/// Best of `restarts` independent Gibbs runs; the earliest run wins among
/// equal scores.
pub fn gibbs_sampling_with_restarts<S, R>(
    sequences: &[S],
    k: usize,
    iterations: usize,
    restarts: usize,
    rng: &mut R,
) -> SeqmotifResult<MotifSet>
where
    S: AsRef<[u8]>,
    R: Rng + ?Sized,
{
    check_restarts(restarts)?;

    let mut best = gibbs_sampling(sequences, k, iterations, &mut *rng)?;
    for _ in 1..restarts {
        let run = gibbs_sampling(sequences, k, iterations, &mut *rng)?;
        if run.score() < best.score() {
            best = run;
        }
    }

    Ok(best)
}
