use crate::codon::Codon;
use crate::error::{SeqError, SeqResult};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const AAS: &str = "AAs";
const STARTS: &str = "Starts";
const BASE1: &str = "Base1";
const BASE2: &str = "Base2";
const BASE3: &str = "Base3";

/// Codon to amino acid mapping read from an NCBI style table with the lines
/// `AAs`, `Starts`, `Base1`, `Base2` and `Base3`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GeneticCodeTable {
    amino_acids: HashMap<Codon, u8>,
    starts: HashSet<Codon>,
}

impl GeneticCodeTable {
    pub(crate) fn from_path(path: &Path) -> SeqResult<GeneticCodeTable> {
        let contents = fs::read_to_string(path).map_err(|source| SeqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = contents.parse::<GeneticCodeTable>()?;
        info!(
            "Loaded genetic code table with {} codons from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub(crate) fn amino_acid(&self, codon: &Codon) -> Option<u8> {
        self.amino_acids.get(codon).copied()
    }

    pub(crate) fn is_start(&self, codon: &Codon) -> bool {
        self.starts.contains(codon)
    }

    pub(crate) fn len(&self) -> usize {
        self.amino_acids.len()
    }
}

impl FromStr for GeneticCodeTable {
    type Err = SeqError;

    fn from_str(s: &str) -> SeqResult<Self> {
        let mut fields: HashMap<&str, &[u8]> = HashMap::new();
        for line in s.lines() {
            if let Some((key, value)) = line.trim().split_once('=') {
                let key = key.trim();
                if [AAS, STARTS, BASE1, BASE2, BASE3].contains(&key) {
                    fields.insert(key, value.trim().as_bytes());
                }
            }
        }
        let field = |label: &'static str| {
            match fields.get(label).copied() {
                None => Err(SeqError::MissingTableLine { label }),
                Some(value) if !value.is_ascii() => Err(SeqError::NonAsciiTableValue { label }),
                Some(value) => Ok(value),
            }
        };
        let aas = field(AAS)?;
        let starts = field(STARTS)?;
        let base1 = field(BASE1)?;
        let base2 = field(BASE2)?;
        let base3 = field(BASE3)?;

        let rows = aas.len();
        if [starts, base1, base2, base3].iter().any(|v| v.len() != rows) {
            return Err(SeqError::TableLengthMismatch {
                aas: aas.len(),
                starts: starts.len(),
                base1: base1.len(),
                base2: base2.len(),
                base3: base3.len(),
            });
        }

        let mut amino_acids = HashMap::with_capacity(rows);
        let mut start_codons = HashSet::new();
        for k in 0..rows {
            let codon = Codon::from_bases(base1[k], base2[k], base3[k]);
            if amino_acids.insert(codon, aas[k]).is_some() {
                return Err(SeqError::DuplicateCodon {
                    codon: codon.to_string(),
                });
            }
            if starts[k] == b'M' {
                start_codons.insert(codon);
            }
        }
        debug!("Genetic code table has {} start codons", start_codons.len());

        Ok(GeneticCodeTable {
            amino_acids,
            starts: start_codons,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    pub(crate) const VERTEBRATE_MITOCHONDRIAL: &str = "    AAs  = FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG
  Starts = ----------**--------------------MMMM----------**---M------------
  Base1  = TTTTTTTTTTTTTTTTCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAAGGGGGGGGGGGGGGGG
  Base2  = TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGG
  Base3  = TCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAG
";

    #[test]
    fn parses_vertebrate_mitochondrial_table() {
        let table: GeneticCodeTable = VERTEBRATE_MITOCHONDRIAL.parse().unwrap();
        assert_eq!(table.len(), 64);
        assert_eq!(table.amino_acid(&Codon(*b"tga")), Some(b'W'));
        assert_eq!(table.amino_acid(&Codon(*b"aga")), Some(b'*'));
        assert_eq!(table.amino_acid(&Codon(*b"ata")), Some(b'M'));
        assert_eq!(table.amino_acid(&Codon(*b"ttt")), Some(b'F'));
        assert_eq!(table.amino_acid(&Codon(*b"ggg")), Some(b'G'));
    }

    #[test]
    fn reads_start_codons() {
        let table: GeneticCodeTable = VERTEBRATE_MITOCHONDRIAL.parse().unwrap();
        assert!(table.is_start(&Codon(*b"atg")));
        assert!(table.is_start(&Codon(*b"att")));
        assert!(table.is_start(&Codon(*b"gtg")));
        assert!(!table.is_start(&Codon(*b"ttt")));
    }

    #[test]
    fn line_order_does_not_matter() {
        let reversed = VERTEBRATE_MITOCHONDRIAL
            .lines()
            .rev()
            .collect::<Vec<_>>()
            .join("\n");
        let forward: GeneticCodeTable = VERTEBRATE_MITOCHONDRIAL.parse().unwrap();
        let backward: GeneticCodeTable = reversed.parse().unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn ignores_unrelated_lines() {
        let text = format!("Vertebrate Mitochondrial (transl_table=2)\n\n{VERTEBRATE_MITOCHONDRIAL}");
        let table: GeneticCodeTable = text.parse().unwrap();
        assert_eq!(table.len(), 64);
    }

    #[test]
    fn missing_line_is_an_error() {
        for label in [AAS, STARTS, BASE1, BASE2, BASE3] {
            let text = VERTEBRATE_MITOCHONDRIAL
                .lines()
                .filter(|line| line.split('=').next().map(str::trim) != Some(label))
                .collect::<Vec<_>>()
                .join("\n");
            match text.parse::<GeneticCodeTable>() {
                Err(SeqError::MissingTableLine { label: missing }) => assert_eq!(missing, label),
                other => panic!("Expected missing {label}, got {:?}", other),
            }
        }
    }

    #[test]
    fn unequal_lengths_are_an_error() {
        let text = "AAs = MKA\nStarts = M--\nBase1 = AAG\nBase2 = TAC\nBase3 = GA\n";
        assert!(matches!(
            text.parse::<GeneticCodeTable>(),
            Err(SeqError::TableLengthMismatch { base3: 2, .. })
        ));
    }

    #[test]
    fn non_ascii_value_is_an_error() {
        let text = "AAs = MKÄ\nStarts = M--\nBase1 = AAG\nBase2 = TAC\nBase3 = GAC\n";
        assert!(matches!(
            text.parse::<GeneticCodeTable>(),
            Err(SeqError::NonAsciiTableValue { label: "AAs" })
        ));
    }

    #[test]
    fn non_ascii_base_is_an_error() {
        let text = "AAs = MKA\nStarts = M--\nBase1 = AAG\nBase2 = TAC\nBase3 = GAÇ\n";
        assert!(matches!(
            text.parse::<GeneticCodeTable>(),
            Err(SeqError::NonAsciiTableValue { label: "Base3" })
        ));
    }

    #[test]
    fn duplicate_codon_is_an_error() {
        let text = "AAs = MK\nStarts = --\nBase1 = AA\nBase2 = TT\nBase3 = GG\n";
        assert!(matches!(
            text.parse::<GeneticCodeTable>(),
            Err(SeqError::DuplicateCodon { .. })
        ));
    }

    #[test]
    fn reads_table_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", VERTEBRATE_MITOCHONDRIAL).unwrap();
        let table = GeneticCodeTable::from_path(&path).unwrap();
        assert_eq!(table.len(), 64);
    }

    #[test]
    fn missing_table_file_is_an_io_error() {
        assert!(matches!(
            GeneticCodeTable::from_path(Path::new("no/such/table.txt")),
            Err(SeqError::Io { .. })
        ));
    }
}
