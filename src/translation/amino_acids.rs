use crate::error::SeqError;
use std::fmt;
use std::str::FromStr;

/// NCBI genetic codes known to the built-in reference translator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum GeneticCode {
    Standard,
    VertebrateMitochondrial,
}

impl GeneticCode {
    pub(crate) fn ncbi_id(&self) -> u8 {
        match self {
            GeneticCode::Standard => 1,
            GeneticCode::VertebrateMitochondrial => 2,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            GeneticCode::Standard => "Standard",
            GeneticCode::VertebrateMitochondrial => "Vertebrate Mitochondrial",
        }
    }
}

impl FromStr for GeneticCode {
    type Err = SeqError;

    /// Accepts the NCBI name (case insensitive) or the NCBI table number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "1" => Ok(GeneticCode::Standard),
            "vertebrate mitochondrial" | "2" => Ok(GeneticCode::VertebrateMitochondrial),
            _ => Err(SeqError::UnknownGeneticCode {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (transl_table={})", self.name(), self.ncbi_id())
    }
}

/// Amino acids and stop
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    Stop,
}

impl AminoAcid {
    /// Converts an uppercase RNA codon to an amino acid or stop under the given genetic code.
    /// Returns `None` for anything that is not a codon of `ACGU`.
    pub(crate) fn from_codon(codon: &[u8], code: GeneticCode) -> Option<AminoAcid> {
        if code == GeneticCode::VertebrateMitochondrial {
            match codon {
                b"AGA" | b"AGG" => return Some(AminoAcid::Stop),
                b"AUA" => return Some(AminoAcid::Methionine),
                b"UGA" => return Some(AminoAcid::Tryptophan),
                _ => {}
            }
        }
        match codon {
            b"GCU" | b"GCC" | b"GCA" | b"GCG" => Some(AminoAcid::Alanine),
            b"CGU" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => Some(AminoAcid::Arginine),
            b"AAU" | b"AAC" => Some(AminoAcid::Asparagine),
            b"GAU" | b"GAC" => Some(AminoAcid::AsparticAcid),
            b"UGU" | b"UGC" => Some(AminoAcid::Cysteine),
            b"GAA" | b"GAG" => Some(AminoAcid::GlutamicAcid),
            b"CAA" | b"CAG" => Some(AminoAcid::Glutamine),
            b"GGU" | b"GGC" | b"GGA" | b"GGG" => Some(AminoAcid::Glycine),
            b"CAU" | b"CAC" => Some(AminoAcid::Histidine),
            b"AUU" | b"AUC" | b"AUA" => Some(AminoAcid::Isoleucine),
            b"UUA" | b"UUG" | b"CUU" | b"CUC" | b"CUA" | b"CUG" => Some(AminoAcid::Leucine),
            b"AAA" | b"AAG" => Some(AminoAcid::Lysine),
            b"AUG" => Some(AminoAcid::Methionine),
            b"UUU" | b"UUC" => Some(AminoAcid::Phenylalanine),
            b"CCU" | b"CCC" | b"CCA" | b"CCG" => Some(AminoAcid::Proline),
            b"UCU" | b"UCC" | b"UCA" | b"UCG" | b"AGU" | b"AGC" => Some(AminoAcid::Serine),
            b"ACU" | b"ACC" | b"ACA" | b"ACG" => Some(AminoAcid::Threonine),
            b"UGG" => Some(AminoAcid::Tryptophan),
            b"UAU" | b"UAC" => Some(AminoAcid::Tyrosine),
            b"GUU" | b"GUC" | b"GUA" | b"GUG" => Some(AminoAcid::Valine),
            b"UAA" | b"UAG" | b"UGA" => Some(AminoAcid::Stop),
            _ => None,
        }
    }

    pub(crate) fn short_abbreviation(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
            AminoAcid::Stop => '*',
        }
    }
}
