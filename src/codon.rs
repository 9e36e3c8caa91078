use crate::error::{SeqError, SeqResult};
use log::warn;
use serde::{Serialize, Serializer};
use std::fmt;

/// Three consecutive nucleotides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Codon(pub(crate) [u8; 3]);

impl Codon {
    pub(crate) fn from_bases(first: u8, second: u8, third: u8) -> Codon {
        Codon([
            first.to_ascii_lowercase(),
            second.to_ascii_lowercase(),
            third.to_ascii_lowercase(),
        ])
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The codons of a sequence in reading order, plus the number of trailing symbols that did not
/// complete a codon.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Codons {
    pub(crate) codons: Vec<Codon>,
    pub(crate) remainder: usize,
}

impl Codons {
    pub(crate) fn len(&self) -> usize {
        self.codons.len()
    }

    /// Codon at a 1-based position.
    pub(crate) fn nth(&self, position: usize) -> SeqResult<Codon> {
        position
            .checked_sub(1)
            .and_then(|index| self.codons.get(index))
            .copied()
            .ok_or(SeqError::InsufficientCodons {
                requested: position,
                available: self.codons.len(),
            })
    }
}

/// Groups a sequence into non-overlapping codons, dropping the 1 or 2 trailing symbols that do
/// not complete a codon.
pub(crate) fn split_codons(sequence: &[u8]) -> Codons {
    let chunks = sequence.chunks_exact(3);
    let remainder = chunks.remainder().len();
    let codons = chunks
        .map(|chunk| Codon([chunk[0], chunk[1], chunk[2]]))
        .collect();
    if remainder > 0 {
        warn!(
            "Sequence length {} is not a multiple of 3, dropping {} trailing symbol(s)",
            sequence.len(),
            remainder
        );
    }
    Codons { codons, remainder }
}

/// A codon selected for the report together with its 1-based position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct ReportedCodon {
    pub(crate) position: usize,
    pub(crate) codon: Codon,
}

/// Picks the codons at the given 1-based positions. Fails if any position lies past the end.
pub(crate) fn report_codons(codons: &Codons, positions: &[usize]) -> SeqResult<Vec<ReportedCodon>> {
    positions
        .iter()
        .map(|&position| {
            codons
                .nth(position)
                .map(|codon| ReportedCodon { position, codon })
        })
        .collect()
}

/// English ordinal for a position, e.g. `13th`, `22nd`.
pub(crate) fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}
