use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SeqError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("FASTA file {path} contains no records")]
    EmptyFasta { path: PathBuf },

    #[error("invalid FASTA record in {path}: {msg}")]
    Fasta { path: PathBuf, msg: String },

    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("insufficient codons: codon {requested} requested but only {available} available")]
    InsufficientCodons { requested: usize, available: usize },

    #[cfg_attr(not(feature = "validation"), allow(dead_code))]
    #[error("sequence of length {length} is too short to drop {trim} trailing symbols")]
    InsufficientLength { length: usize, trim: usize },

    #[error("genetic code table is missing the '{label}' line")]
    MissingTableLine { label: &'static str },

    #[error("genetic code table line '{label}' contains non-ASCII symbols")]
    NonAsciiTableValue { label: &'static str },

    #[error(
        "genetic code table lines differ in length (AAs={aas}, Starts={starts}, Base1={base1}, Base2={base2}, Base3={base3})"
    )]
    TableLengthMismatch {
        aas: usize,
        starts: usize,
        base1: usize,
        base2: usize,
        base3: usize,
    },

    #[error("genetic code table defines codon '{codon}' more than once")]
    DuplicateCodon { codon: String },

    #[error("unknown codon '{codon}' at codon index {index}")]
    UnknownCodon { codon: String, index: usize },

    #[cfg_attr(not(feature = "validation"), allow(dead_code))]
    #[error("unknown genetic code '{name}'")]
    UnknownGeneticCode { name: String },

    #[cfg_attr(not(feature = "validation"), allow(dead_code))]
    #[error("translation mismatch: reference gives {expected} but translation gives {found}")]
    TranslationMismatch { expected: String, found: String },
}

pub(crate) type SeqResult<T> = Result<T, SeqError>;
