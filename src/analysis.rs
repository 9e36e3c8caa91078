use crate::cli::SeqManip;
use crate::codon::{ordinal, report_codons, split_codons, ReportedCodon};
use crate::transcription::transcribe_dna_to_rna;
use crate::translation::table::GeneticCodeTable;
use crate::translation::translate;
use crate::utils::fasta::{read_sequence, reverse_complement};
use crate::utils::wrap;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ValidationStatus {
    #[cfg_attr(not(feature = "validation"), allow(dead_code))]
    Passed,
    Skipped,
    /// Built without the `validation` feature.
    #[cfg_attr(feature = "validation", allow(dead_code))]
    Unavailable,
}

/// Everything reported for one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Analysis {
    pub(crate) sequence: String,
    pub(crate) length: usize,
    pub(crate) rna: String,
    pub(crate) reverse_complement: String,
    pub(crate) codon_count: usize,
    pub(crate) dropped_symbols: usize,
    pub(crate) reported_codons: Vec<ReportedCodon>,
    pub(crate) translation: String,
    pub(crate) validation: ValidationStatus,
}

impl Analysis {
    /// Runs the whole pipeline on the files named in `args`.
    pub(crate) fn run(args: &SeqManip) -> Result<Analysis> {
        let dna = read_sequence(&args.sequence)
            .with_context(|| format!("Failed to load sequence {}", args.sequence.display()))?;
        let rna = transcribe_dna_to_rna(&dna);
        let revcomp = reverse_complement(&dna).context("Failed to reverse complement sequence")?;
        let codons = split_codons(&dna);
        let reported_codons = report_codons(&codons, &args.report_codons)?;

        let table = GeneticCodeTable::from_path(&args.table)
            .with_context(|| format!("Failed to load genetic code table {}", args.table.display()))?;
        let translation = translate(&codons, &table, args.mark_starts)?;
        let validation = check_translation(args, &dna, &translation)?;

        Ok(Analysis {
            sequence: String::from_utf8_lossy(&dna).into_owned(),
            length: dna.len(),
            rna: String::from_utf8_lossy(&rna).into_owned(),
            reverse_complement: String::from_utf8_lossy(&revcomp).into_owned(),
            codon_count: codons.len(),
            dropped_symbols: codons.remainder,
            reported_codons,
            translation,
            validation,
        })
    }

    /// Renders the five numbered report sections, wrapping sequences at `width` symbols.
    pub(crate) fn to_text(&self, width: usize) -> String {
        TextReport {
            analysis: self,
            width,
        }
        .to_string()
    }

    pub(crate) fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

struct TextReport<'a> {
    analysis: &'a Analysis,
    width: usize,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.analysis;
        writeln!(
            f,
            "We are starting with a DNA string of:\n{}\n",
            wrap(analysis.sequence.as_bytes(), self.width)
        )?;
        writeln!(f, "1. The length of the DNA string is {}\n", analysis.length)?;
        writeln!(
            f,
            "2. Converting the DNA strand to RNA gives us:\n{}\n",
            wrap(analysis.rna.as_bytes(), self.width)
        )?;
        writeln!(
            f,
            "3. The reverse complement is:\n{}\n",
            wrap(analysis.reverse_complement.as_bytes(), self.width)
        )?;
        let codons = analysis
            .reported_codons
            .iter()
            .map(|reported| format!("the {} codon is [{}]", ordinal(reported.position), reported.codon))
            .join(" and ");
        writeln!(f, "4. {}\n", capitalize(&codons))?;
        writeln!(
            f,
            "5. The translated sequence is:\n{}",
            wrap(analysis.translation.as_bytes(), self.width)
        )
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(feature = "validation")]
fn check_translation(args: &SeqManip, dna: &[u8], translation: &str) -> Result<ValidationStatus> {
    use crate::validation::{validate, BuiltinTranslator};

    if args.no_validate {
        return Ok(ValidationStatus::Skipped);
    }
    if args.mark_starts {
        warn!("Start codon annotation is enabled, skipping validation");
        return Ok(ValidationStatus::Skipped);
    }
    validate(
        dna,
        translation,
        &BuiltinTranslator,
        &args.reference_code,
        args.validation_trim,
    )?;
    Ok(ValidationStatus::Passed)
}

#[cfg(not(feature = "validation"))]
fn check_translation(args: &SeqManip, _dna: &[u8], _translation: &str) -> Result<ValidationStatus> {
    if args.no_validate {
        return Ok(ValidationStatus::Skipped);
    }
    warn!(
        "Built without the validation feature, translation not checked against {} (trim {})",
        args.reference_code, args.validation_trim
    );
    Ok(ValidationStatus::Unavailable)
}
