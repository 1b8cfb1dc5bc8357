//! Custom assertions for testing
//!
//! Work on plain byte slices so they can be used from any crate without
//! pulling in the engine types.

/// Gap symbol used in aligned output
pub const GAP: u8 = b'-';

/// Assert that stripping gaps from an aligned row gives back the original
pub fn assert_gapless_eq(aligned: &[u8], original: &[u8]) {
    let stripped: Vec<u8> = aligned.iter().copied().filter(|&c| c != GAP).collect();
    assert_eq!(
        stripped,
        original,
        "gap-stripped row {:?} does not match original {:?}",
        String::from_utf8_lossy(aligned),
        String::from_utf8_lossy(original)
    );
}

/// Assert that `aligned` is a gapless-contiguous piece of `original`, i.e.
/// the stripped row occurs in `original` as a substring
pub fn assert_gapless_substring(aligned: &[u8], original: &[u8]) {
    let stripped: Vec<u8> = aligned.iter().copied().filter(|&c| c != GAP).collect();
    let found = stripped.is_empty()
        || original
            .windows(stripped.len())
            .any(|window| window == stripped.as_slice());
    assert!(
        found,
        "{:?} is not a substring of {:?}",
        String::from_utf8_lossy(&stripped),
        String::from_utf8_lossy(original)
    );
}

/// Recompute the score of a pair of aligned rows under flat scoring
pub fn rescore_alignment(
    aligned1: &[u8],
    aligned2: &[u8],
    match_score: i32,
    mismatch: i32,
    indel: i32,
) -> i32 {
    assert_eq!(aligned1.len(), aligned2.len(), "aligned rows differ in length");
    aligned1
        .iter()
        .zip(aligned2)
        .map(|(&a, &b)| {
            if a == GAP || b == GAP {
                -indel
            } else if a == b {
                match_score
            } else {
                -mismatch
            }
        })
        .sum()
}

/// Assert that every motif is `k` long and occurs in its own sequence
pub fn assert_motifs_from_sequences<M, S>(motifs: &[M], sequences: &[S], k: usize)
where
    M: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    assert_eq!(motifs.len(), sequences.len(), "one motif per sequence expected");
    for (i, (motif, seq)) in motifs.iter().zip(sequences).enumerate() {
        let motif = motif.as_ref();
        assert_eq!(motif.len(), k, "motif {} has length {}", i, motif.len());
        assert!(
            seq.as_ref().windows(k).any(|w| w == motif),
            "motif {:?} does not occur in sequence {}",
            String::from_utf8_lossy(motif),
            i
        );
    }
}
