/// Transcribes a DNA sequence to an RNA sequence i.e. replaces all `t` with `u`.
/// Every other symbol is passed through unchanged.
pub(crate) fn transcribe_dna_to_rna(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|&nucleotide| match nucleotide {
            b't' => b'u',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_dna_to_rna() {
        assert_eq!(transcribe_dna_to_rna(b"attgc"), b"auugc");
        assert_eq!(transcribe_dna_to_rna(b"gattaca"), b"gauuaca");
        assert_eq!(transcribe_dna_to_rna(b"cgtacg"), b"cguacg");
        assert_eq!(transcribe_dna_to_rna(b"taa"), b"uaa");
    }

    #[test]
    fn test_transcribe_empty_dna() {
        assert_eq!(transcribe_dna_to_rna(b""), Vec::<u8>::new());
    }

    #[test]
    fn test_transcribe_passes_unknown_symbols_through() {
        assert_eq!(transcribe_dna_to_rna(b"atn-x"), b"aun-x");
    }

    #[test]
    fn test_transcribe_leaves_uppercase_alone() {
        assert_eq!(transcribe_dna_to_rna(b"Tt"), b"Tu");
    }

    #[test]
    fn test_transcribe_counts() {
        let dna = b"ttagctgatcgtt";
        let rna = transcribe_dna_to_rna(dna);
        assert_eq!(rna.len(), dna.len());
        let count = |seq: &[u8], symbol: u8| seq.iter().filter(|&&s| s == symbol).count();
        assert_eq!(count(&rna, b'u'), count(dna, b't'));
        assert_eq!(count(&rna, b't'), 0);
        for (&before, &after) in dna.iter().zip(rna.iter()) {
            if before != b't' {
                assert_eq!(before, after);
            }
        }
    }
}
