use clap::builder::RangedU64ValueParser;
use clap_derive::{Parser, ValueEnum};
use std::path::PathBuf;

/// Transcribe, reverse complement and translate a coding sequence
#[derive(Parser, Debug)]
#[clap(version, about)]
pub(crate) struct SeqManip {
    /// Path to the sequence file (plain text or FASTA)
    #[clap(short, long, default_value = "CodingSeq.txt")]
    pub(crate) sequence: PathBuf,

    /// Path to the genetic code table with `AAs`, `Starts`, `Base1`, `Base2` and `Base3` lines
    #[clap(short, long, default_value = "VertMitTransTable.txt")]
    pub(crate) table: PathBuf,

    /// Number of symbols per line when printing sequences. 0 disables wrapping.
    #[clap(short, long, default_value_t = 70)]
    pub(crate) width: usize,

    /// 1-based positions of the codons to report, separated by commas
    #[clap(
        long,
        value_delimiter = ',',
        default_values_t = [13, 14],
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub(crate) report_codons: Vec<usize>,

    /// Follow the amino acid of every start codon with `*`. Disables validation.
    #[clap(long)]
    pub(crate) mark_starts: bool,

    /// Genetic code used by the reference translation, by NCBI name or number
    #[clap(long, default_value = "Vertebrate Mitochondrial")]
    pub(crate) reference_code: String,

    /// Number of trailing symbols dropped before the reference translation
    #[clap(long, default_value_t = 2)]
    pub(crate) validation_trim: usize,

    /// Skip the comparison with the reference translation
    #[clap(long)]
    pub(crate) no_validate: bool,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
