//! Laplace-smoothed profile matrices and most-probable k-mer lookup

use crate::motif::motif_set::check_rectangular;
use seqmotif_core::{SeqmotifError, SeqmotifResult};
use std::collections::{BTreeMap, BTreeSet};

/// Per-position symbol probabilities of a set of equal-length motifs.
///
/// Only symbols in the profile's alphabet have a row; looking up anything
/// else is an error rather than a zero probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    rows: BTreeMap<u8, Vec<f64>>,
    width: usize,
}

/// Round the exact binary value of `value` to two decimal places, so 1/40
/// (stored just above 0.025) gives 0.03.
fn round2(value: f64) -> SeqmotifResult<f64> {
    let rounded = format!("{:.2}", value)
        .parse::<f64>()
        .map_err(|e| SeqmotifError::Other(format!("cannot round {}: {}", value, e)))?;
    // Large alphabets times many motifs can round a pseudocount down to zero
    Ok(rounded.max(0.01))
}

impl Profile {
    /// Number of columns (k)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Symbols that have a row, in ascending byte order
    pub fn alphabet(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.keys().copied()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.rows.contains_key(&symbol)
    }

    /// Probability of `symbol` at `column`, `None` if the symbol has no row
    /// or the column is out of range
    pub fn probability(&self, symbol: u8, column: usize) -> Option<f64> {
        self.rows.get(&symbol).and_then(|row| row.get(column).copied())
    }

    /// Full row for `symbol`
    pub fn row(&self, symbol: u8) -> Option<&[f64]> {
        self.rows.get(&symbol).map(Vec::as_slice)
    }

    /// Product of per-position probabilities of `kmer` under this profile
    pub fn kmer_probability(&self, kmer: &[u8]) -> SeqmotifResult<f64> {
        if kmer.len() != self.width {
            return Err(SeqmotifError::invalid_input(format!(
                "k-mer length {} does not match profile width {}",
                kmer.len(),
                self.width
            )));
        }

        let mut probability = 1.0;
        for (pos, &symbol) in kmer.iter().enumerate() {
            let row = self.rows.get(&symbol).ok_or(SeqmotifError::UnknownSymbol {
                symbol: symbol as char,
                position: pos,
            })?;
            probability *= row[pos];
        }
        Ok(probability)
    }
}

/// Profile of `motifs` over the symbols they contain.
///
/// Entry (s, c) is (count of s in column c + 1) / (N + |alphabet|), rounded
/// to two decimals.
pub fn build_profile<M: AsRef<[u8]>>(motifs: &[M]) -> SeqmotifResult<Profile> {
    check_rectangular(motifs)?;
    let k = motifs[0].as_ref().len();
    build_profile_with_alphabet(motifs, k, &[])
}

/// Profile of `motifs` whose rows cover `alphabet` as well as every symbol
/// the motifs contain.
///
/// `motifs` may be empty here, giving a uniform profile of width `k`.
pub fn build_profile_with_alphabet<M: AsRef<[u8]>>(
    motifs: &[M],
    k: usize,
    alphabet: &[u8],
) -> SeqmotifResult<Profile> {
    if k == 0 {
        return Err(SeqmotifError::invalid_input("profile width k must be positive"));
    }
    if let Some((idx, motif)) = motifs
        .iter()
        .enumerate()
        .find(|(_, m)| m.as_ref().len() != k)
    {
        return Err(SeqmotifError::invalid_input(format!(
            "motif {} has length {}, expected {}",
            idx,
            motif.as_ref().len(),
            k
        )));
    }

    let mut symbols: BTreeSet<u8> = alphabet.iter().copied().collect();
    for motif in motifs {
        symbols.extend(motif.as_ref().iter().copied());
    }
    if symbols.is_empty() {
        return Err(SeqmotifError::invalid_input(
            "cannot build a profile without any symbols",
        ));
    }

    let mut counts: BTreeMap<u8, Vec<u32>> =
        symbols.iter().map(|&s| (s, vec![1u32; k])).collect();
    for motif in motifs {
        for (col, symbol) in motif.as_ref().iter().enumerate() {
            if let Some(row) = counts.get_mut(symbol) {
                row[col] += 1;
            }
        }
    }

    let denominator = (motifs.len() + symbols.len()) as f64;
    let mut rows = BTreeMap::new();
    for (symbol, row) in counts {
        let probabilities = row
            .into_iter()
            .map(|count| round2(count as f64 / denominator))
            .collect::<SeqmotifResult<Vec<f64>>>()?;
        rows.insert(symbol, probabilities);
    }

    Ok(Profile { rows, width: k })
}

/// The k-window of `sequence` with the highest probability under `profile`.
///
/// The first window wins ties. Fails if any symbol of `sequence` has no row
/// in the profile.
pub fn most_probable_kmer(sequence: &[u8], k: usize, profile: &Profile) -> SeqmotifResult<Vec<u8>> {
    if k == 0 {
        return Err(SeqmotifError::invalid_input("k must be positive"));
    }
    if k > sequence.len() {
        return Err(SeqmotifError::invalid_input(format!(
            "k={} exceeds sequence length {}",
            k,
            sequence.len()
        )));
    }
    if profile.width() != k {
        return Err(SeqmotifError::invalid_input(format!(
            "profile width {} does not match k={}",
            profile.width(),
            k
        )));
    }
    if let Some(pos) = sequence.iter().position(|&s| !profile.contains(s)) {
        return Err(SeqmotifError::UnknownSymbol {
            symbol: sequence[pos] as char,
            position: pos,
        });
    }

    let mut best_start = 0;
    let mut best_probability = f64::NEG_INFINITY;
    for (start, window) in sequence.windows(k).enumerate() {
        let probability = profile.kmer_probability(window)?;
        if probability > best_probability {
            best_probability = probability;
            best_start = start;
        }
    }

    Ok(sequence[best_start..best_start + k].to_vec())
}
