use crate::error::{SeqError, SeqResult};
use bio::alphabets::dna;
use bio::io::fasta;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Reads the sequence at `path`, either as plain text or as the first record of a FASTA file.
///
/// All whitespace is removed, including interior line breaks, and the sequence is lowercased.
/// No alphabet check is performed here.
pub(crate) fn read_sequence(path: &Path) -> SeqResult<Vec<u8>> {
    let contents = fs::read_to_string(path).map_err(|source| SeqError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = contents.trim_start();
    let raw = if trimmed.starts_with('>') {
        debug!("Reading {} as FASTA", path.display());
        first_fasta_record(path, trimmed)?
    } else {
        trimmed.as_bytes().to_vec()
    };
    let sequence: Vec<u8> = raw
        .into_iter()
        .filter(|symbol| !symbol.is_ascii_whitespace())
        .map(|symbol| symbol.to_ascii_lowercase())
        .collect();
    info!(
        "Loaded sequence of length {} from {}",
        sequence.len(),
        path.display()
    );
    Ok(sequence)
}

fn first_fasta_record(path: &Path, contents: &str) -> SeqResult<Vec<u8>> {
    let reader = fasta::Reader::new(contents.as_bytes());
    let record = reader
        .records()
        .next()
        .ok_or_else(|| SeqError::EmptyFasta {
            path: path.to_path_buf(),
        })?
        .map_err(|source| SeqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    record.check().map_err(|msg| SeqError::Fasta {
        path: path.to_path_buf(),
        msg: msg.to_string(),
    })?;
    debug!("Using FASTA record {}", record.id());
    Ok(record.seq().to_vec())
}

/// Reverse complement of a lowercase DNA sequence. Fails on the first symbol outside `acgt`.
pub(crate) fn reverse_complement(sequence: &[u8]) -> SeqResult<Vec<u8>> {
    if let Some(position) = sequence
        .iter()
        .position(|symbol| !matches!(symbol, b'a' | b'c' | b'g' | b't'))
    {
        return Err(SeqError::InvalidSymbol {
            symbol: sequence[position] as char,
            position,
        });
    }
    Ok(dna::revcomp(sequence))
}
