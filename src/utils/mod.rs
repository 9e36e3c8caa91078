use itertools::Itertools;

pub(crate) mod fasta;

/// Breaks a sequence into lines of at most `width` symbols. A width of 0 disables wrapping.
pub(crate) fn wrap(sequence: &[u8], width: usize) -> String {
    if width == 0 {
        return String::from_utf8_lossy(sequence).into_owned();
    }
    sequence
        .chunks(width)
        .map(String::from_utf8_lossy)
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_width() {
        assert_eq!(wrap(b"atgcatgcat", 4), "atgc\natgc\nat");
    }

    #[test]
    fn short_sequence_is_a_single_line() {
        assert_eq!(wrap(b"atg", 70), "atg");
    }

    #[test]
    fn exact_multiple_has_no_trailing_newline() {
        assert_eq!(wrap(b"atgcat", 3), "atg\ncat");
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(wrap(b"atgcatgcat", 0), "atgcatgcat");
    }

    #[test]
    fn empty_sequence_wraps_to_empty_string() {
        assert_eq!(wrap(b"", 70), "");
    }
}
