use crate::codon::Codons;
use crate::error::{SeqError, SeqResult};
use log::debug;
use table::GeneticCodeTable;

#[cfg(feature = "validation")]
pub(crate) mod amino_acids;
pub(crate) mod table;

/// Marker appended to the amino acid of a start codon when start annotation is enabled.
pub(crate) const START_MARKER: char = '*';

/// Translates codons to one-letter amino acids using `table`.
///
/// With `annotate_starts`, every codon flagged as a start codon in the table is followed by
/// [`START_MARKER`]. Fails on the first codon the table does not define.
pub(crate) fn translate(
    codons: &Codons,
    table: &GeneticCodeTable,
    annotate_starts: bool,
) -> SeqResult<String> {
    let mut protein = String::with_capacity(codons.len());
    for (index, codon) in codons.codons.iter().enumerate() {
        let amino_acid = table
            .amino_acid(codon)
            .ok_or_else(|| SeqError::UnknownCodon {
                codon: codon.to_string(),
                index,
            })?;
        protein.push(amino_acid as char);
        if annotate_starts && table.is_start(codon) {
            protein.push(START_MARKER);
        }
    }
    debug!("Translated {} codons", codons.len());
    Ok(protein)
}
