//! Self-consistency checks between the strand encoder and generated text.
//!
//! A synthesized sequence is rendered straight from its nucleotides, either
//! by reading them in order through the forward letters, or by reading them
//! backwards through the complementary letters. The functions here rebuild
//! the same text through the packed representation instead, so that any
//! disagreement between the two paths is caught as soon as it occurs.

use log::error;

use super::abc::Nucleotide;
use super::abc::Strand;
use super::abc::Symbol;
use super::err::ValidationError;
use super::packed;
use super::packed::Word;

/// Check a sequence text against the nucleotides it was rendered from.
///
/// The forward path packs and unpacks the nucleotides, the reverse path
/// flips the packed word the same way as [`packed::reverse_complement_encode`].
/// Sequences longer than a `u128` word are checked in consecutive chunks.
///
/// # Example
/// ```
/// # use motifsynth::abc::Nucleotide::*;
/// # use motifsynth::abc::Strand;
/// # use motifsynth::validate::check;
/// assert!(check("ATCG", &[A, T, C, G], Strand::Direct).is_ok());
/// assert!(check("CGAT", &[A, T, C, G], Strand::Reverse).is_ok());
/// assert!(check("ATCG", &[A, T, C, G], Strand::Reverse).is_err());
/// ```
pub fn check(observed: &str, bases: &[Nucleotide], strand: Strand) -> Result<(), ValidationError> {
    check_with::<u128>(observed, bases, strand)
}

/// Check a sequence text using bitfields of the given word type.
pub fn check_with<W: Word>(
    observed: &str,
    bases: &[Nucleotide],
    strand: Strand,
) -> Result<(), ValidationError> {
    let expected = match strand {
        Strand::Direct => forward::<W>(bases),
        Strand::Reverse => reverse::<W>(bases),
    };
    if expected == observed {
        return Ok(());
    }

    error!(
        "{:?} strand check failed: expected {}, observed {}",
        strand, expected, observed
    );
    let observed = observed.to_string();
    Err(match strand {
        Strand::Direct => ValidationError::EncodingMismatch { expected, observed },
        Strand::Reverse => ValidationError::ReverseComplementMismatch { expected, observed },
    })
}

fn forward<W: Word>(bases: &[Nucleotide]) -> String {
    let mut text = String::with_capacity(bases.len());
    for chunk in bases.chunks(W::CAPACITY) {
        let value = packed::pack::<W>(chunk);
        text.extend(packed::unpack(value, chunk.len()).iter().map(Symbol::as_char));
    }
    text
}

fn reverse<W: Word>(bases: &[Nucleotide]) -> String {
    let mut text = String::with_capacity(bases.len());
    // the reverse complement of the last chunk comes first
    for chunk in bases.rchunks(W::CAPACITY) {
        let value = packed::flip(packed::pack::<W>(chunk), chunk.len());
        text.extend(packed::unpack(value, chunk.len()).iter().map(Symbol::as_char));
    }
    text
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::abc::Nucleotide::*;

    #[test]
    fn test_check_forward() {
        assert!(check("GATTACA", &[G, A, T, T, A, C, A], Strand::Direct).is_ok());
        assert_eq!(
            check("GATTACC", &[G, A, T, T, A, C, A], Strand::Direct),
            Err(ValidationError::EncodingMismatch {
                expected: String::from("GATTACA"),
                observed: String::from("GATTACC"),
            })
        );
    }

    #[test]
    fn test_check_reverse() {
        assert!(check("TGTAATC", &[G, A, T, T, A, C, A], Strand::Reverse).is_ok());
        assert!(matches!(
            check("GATTACA", &[G, A, T, T, A, C, A], Strand::Reverse),
            Err(ValidationError::ReverseComplementMismatch { .. })
        ));
    }

    #[test]
    fn test_check_empty() {
        assert!(check("", &[], Strand::Direct).is_ok());
        assert!(check("", &[], Strand::Reverse).is_ok());
    }

    #[test]
    fn test_check_chunked() {
        let bases = (0..100)
            .map(|i| Nucleotide::from_bits((i * 7 % 5) as u8))
            .collect::<Vec<_>>();
        let direct = bases.iter().map(Symbol::as_char).collect::<String>();
        let reverse = packed::reverse_complement(&bases)
            .iter()
            .map(Symbol::as_char)
            .collect::<String>();
        assert!(check_with::<u32>(&direct, &bases, Strand::Direct).is_ok());
        assert!(check_with::<u32>(&reverse, &bases, Strand::Reverse).is_ok());
        assert!(check(&reverse, &bases, Strand::Reverse).is_ok());
        assert!(check_with::<u64>(&direct, &bases, Strand::Reverse).is_err());
    }

    #[test]
    fn test_check_mismatch_expected() {
        // 33 bases span three `u32` chunks, the last one a single base
        let bases = (0..33)
            .map(|i| Nucleotide::from_bits(i as u8))
            .collect::<Vec<_>>();
        let reverse = packed::reverse_complement(&bases)
            .iter()
            .map(Symbol::as_char)
            .collect::<String>();
        match check_with::<u32>("", &bases, Strand::Reverse) {
            Err(ValidationError::ReverseComplementMismatch { expected, observed }) => {
                assert_eq!(expected, reverse);
                assert_eq!(observed, "");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match check_with::<u32>("", &bases, Strand::Direct) {
            Err(ValidationError::EncodingMismatch { expected, .. }) => {
                assert_eq!(expected.len(), 33);
                assert!(expected.starts_with("ACGTACGT"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
