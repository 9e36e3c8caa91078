use crate::error::{SeqError, SeqResult};
use crate::translation::amino_acids::{AminoAcid, GeneticCode};
use log::{debug, info};

/// Independent translator used to cross-check translations made with a user supplied table.
pub(crate) trait ReferenceTranslator {
    fn translate(&self, dna: &[u8], code_name: &str) -> SeqResult<String>;
}

/// Reference translator backed by compiled-in NCBI genetic codes.
/// Trailing symbols that do not complete a codon are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BuiltinTranslator;

impl ReferenceTranslator for BuiltinTranslator {
    fn translate(&self, dna: &[u8], code_name: &str) -> SeqResult<String> {
        let code: GeneticCode = code_name.parse()?;
        debug!("Reference translation with {code}");
        dna.chunks_exact(3)
            .enumerate()
            .map(|(index, codon)| {
                let rna: Vec<u8> = codon
                    .iter()
                    .map(|base| match base.to_ascii_uppercase() {
                        b'T' => b'U',
                        other => other,
                    })
                    .collect();
                AminoAcid::from_codon(&rna, code)
                    .map(|amino_acid| amino_acid.short_abbreviation())
                    .ok_or_else(|| SeqError::UnknownCodon {
                        codon: String::from_utf8_lossy(codon).into_owned(),
                        index,
                    })
            })
            .collect()
    }
}

/// Compares `translated` with the reference translation of `dna` minus its last `trim` symbols.
pub(crate) fn validate(
    dna: &[u8],
    translated: &str,
    reference: &dyn ReferenceTranslator,
    code_name: &str,
    trim: usize,
) -> SeqResult<()> {
    let end = dna
        .len()
        .checked_sub(trim)
        .ok_or(SeqError::InsufficientLength {
            length: dna.len(),
            trim,
        })?;
    let expected = reference.translate(&dna[..end], code_name)?;
    if expected != translated {
        return Err(SeqError::TranslationMismatch {
            expected,
            found: translated.to_string(),
        });
    }
    info!("Translation agrees with the {code_name} reference");
    Ok(())
}
