//! Motif sets and their column statistics

use crate::motif::profile::{build_profile, Profile};
use seqmotif_core::{SeqmotifError, SeqmotifResult};
use std::ops::Deref;

/// One k-mer per input sequence, all of the same length.
///
/// Search procedures replace a `MotifSet` wholesale; it is never edited in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSet {
    motifs: Vec<Vec<u8>>,
}

impl MotifSet {
    /// Wrap `motifs`, checking that the set is non-empty and rectangular
    pub fn new(motifs: Vec<Vec<u8>>) -> SeqmotifResult<Self> {
        check_rectangular(&motifs)?;
        Ok(Self { motifs })
    }

    /// Motif width
    pub fn k(&self) -> usize {
        self.motifs[0].len()
    }

    pub fn consensus(&self) -> Vec<u8> {
        column_pluralities(&self.motifs)
            .into_iter()
            .map(|(symbol, _)| symbol)
            .collect()
    }

    pub fn score(&self) -> usize {
        let t = self.motifs.len();
        column_pluralities(&self.motifs)
            .into_iter()
            .map(|(_, count)| t - count)
            .sum()
    }

    pub fn profile(&self) -> SeqmotifResult<Profile> {
        build_profile(&self.motifs)
    }

    pub fn into_inner(self) -> Vec<Vec<u8>> {
        self.motifs
    }

    /// Motifs rendered as strings, for logging and reports
    pub fn to_strings(&self) -> Vec<String> {
        self.motifs
            .iter()
            .map(|m| String::from_utf8_lossy(m).into_owned())
            .collect()
    }
}

impl Deref for MotifSet {
    type Target = [Vec<u8>];

    fn deref(&self) -> &Self::Target {
        &self.motifs
    }
}

/// Per-column plurality symbol of a motif set.
///
/// Ties go to the symbol seen first when reading the column top to bottom.
pub fn consensus<M: AsRef<[u8]>>(motifs: &[M]) -> SeqmotifResult<Vec<u8>> {
    check_rectangular(motifs)?;
    Ok(column_pluralities(motifs)
        .into_iter()
        .map(|(symbol, _)| symbol)
        .collect())
}

/// Sum over columns of (number of motifs - plurality count).
///
/// Zero means every column is perfectly conserved.
pub fn score<M: AsRef<[u8]>>(motifs: &[M]) -> SeqmotifResult<usize> {
    check_rectangular(motifs)?;
    let t = motifs.len();
    Ok(column_pluralities(motifs)
        .into_iter()
        .map(|(_, count)| t - count)
        .sum())
}

pub(crate) fn check_rectangular<M: AsRef<[u8]>>(motifs: &[M]) -> SeqmotifResult<()> {
    let first = motifs
        .first()
        .ok_or_else(|| SeqmotifError::invalid_input("motif set is empty"))?;
    let k = first.as_ref().len();

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

    Ok(())
}

/// (plurality symbol, its count) for every column. Caller guarantees a
/// non-empty rectangular set.
fn column_pluralities<M: AsRef<[u8]>>(motifs: &[M]) -> Vec<(u8, usize)> {
    let k = motifs[0].as_ref().len();
    let mut counts: Vec<(u8, usize)> = Vec::new();

    (0..k)
        .map(|col| {
            // Insertion order of `counts` is first-seen order within the column
            counts.clear();
            for motif in motifs {
                let symbol = motif.as_ref()[col];
                match counts.iter_mut().find(|(s, _)| *s == symbol) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((symbol, 1)),
                }
            }

            let mut best = counts[0];
            for &entry in &counts[1..] {
                if entry.1 > best.1 {
                    best = entry;
                }
            }
            best
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_consensus_and_score() {
        let motifs = ["AAAGCT", "AAAGGT", "AAAGCT"];
        assert_eq!(consensus(&motifs).unwrap(), b"AAAGCT".to_vec());
        assert_eq!(score(&motifs).unwrap(), 1);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        // Column 0: T then A, one each
        let motifs = ["TC", "AC"];
        assert_eq!(consensus(&motifs).unwrap(), b"TC".to_vec());
        assert_eq!(score(&motifs).unwrap(), 1);

        let motifs = ["GA", "CA", "CA", "GA"];
        assert_eq!(consensus(&motifs).unwrap(), b"GA".to_vec());
        assert_eq!(score(&motifs).unwrap(), 2);
    }

    #[test]
    fn test_perfectly_conserved() {
        let motifs = ["ACGT"; 5];
        assert_eq!(score(&motifs).unwrap(), 0);
        assert_eq!(consensus(&motifs).unwrap(), b"ACGT".to_vec());
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let err = score(&["ACGT", "ACG"]).unwrap_err();
        assert!(matches!(err, SeqmotifError::InvalidInput(_)));
        assert!(consensus(&["AC", "ACG"]).is_err());
    }

    #[test]
    fn test_empty_set_rejected() {
        let empty: [&str; 0] = [];
        assert!(score(&empty).is_err());
        assert!(consensus(&empty).is_err());
        assert!(MotifSet::new(Vec::new()).is_err());
    }

    #[test]
    fn test_motif_set_methods_match_free_functions() {
        let set =
            MotifSet::new(vec![b"TTAC".to_vec(), b"TGAC".to_vec(), b"CGAA".to_vec()]).unwrap();

        assert_eq!(set.k(), 4);
        assert_eq!(set.len(), 3);
        assert_eq!(set.consensus(), consensus(&set).unwrap());
        assert_eq!(set.score(), score(&set).unwrap());
        assert_eq!(set.to_strings(), vec!["TTAC", "TGAC", "CGAA"]);
    }

    #[test]
    fn test_into_inner_returns_motifs_in_order() {
        let motifs = vec![b"CGAA".to_vec(), b"TTAC".to_vec()];
        let set = MotifSet::new(motifs.clone()).unwrap();
        assert_eq!(set.into_inner(), motifs);
    }
}
