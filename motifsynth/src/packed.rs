//! Two-bit packing of nucleotide sequences into integer bitfields.
//!
//! Each nucleotide occupies two bits, with the first (leftmost) symbol of
//! the sequence stored in the most significant pair:
//! ```text
//! A T C G  ->  00 11 01 10  ->  0b00110110 = 50
//! ```
//! Because the codes are chosen so that complementary nucleotides are
//! bitwise negations of each other (`A=00 ↔ T=11`, `C=01 ↔ G=10`), the
//! reverse complement of a packed sequence can be computed directly from
//! its bitfield, by reading the pairs from the lowest to the highest and
//! flipping both bits of each pair.
//!
//! A bitfield does not record its own length, since leading `A` symbols
//! are all-zero pairs: the length must travel with the value, which is
//! what [`PackedSequence`] does.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::abc::ComplementableSymbol;
use super::abc::Nucleotide;
use super::abc::Symbol;
use super::err::InvalidData;

mod seal {
    pub trait Sealed {}

    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
}

// --- Word --------------------------------------------------------------------

/// An unsigned integer type usable as a packed sequence bitfield.
pub trait Word: seal::Sealed + Copy + Default + Eq + Hash + Debug {
    /// The number of bits in the word.
    const BITS: u32;
    /// The maximum number of nucleotides that fit in the word.
    const CAPACITY: usize = (Self::BITS / 2) as usize;

    /// Shift the word by one pair and append the given 2-bit code.
    fn push(self, code: u8) -> Self;
    /// Extract the 2-bit field at pair offset `i`, counting from the lowest.
    fn field(self, i: usize) -> u8;
    /// Get a mask selecting the lowest `k` pairs of the word.
    fn mask(k: usize) -> Self;
    /// Compute the bitwise AND of two words.
    fn and(self, other: Self) -> Self;
}

macro_rules! word {
    ($t:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn push(self, code: u8) -> Self {
                (self << 2) | (code & 0b11) as $t
            }

            #[inline]
            fn field(self, i: usize) -> u8 {
                ((self >> (2 * i)) & 0b11) as u8
            }

            #[inline]
            fn mask(k: usize) -> Self {
                if k >= Self::CAPACITY {
                    <$t>::MAX
                } else {
                    (1 << (2 * k)) - 1
                }
            }

            #[inline]
            fn and(self, other: Self) -> Self {
                self & other
            }
        }
    };
}

word!(u32);
word!(u64);
word!(u128);

// --- Free functions ----------------------------------------------------------

/// Pack a nucleotide sequence into a single word.
///
/// The accumulator starts at zero and each symbol is appended by shifting
/// the accumulator left by two bits and adding the symbol code.
///
/// # Errors
///
/// Returns [`InvalidData`] if the sequence does not fit in the word.
///
/// # Example
/// ```
/// # use motifsynth::abc::Nucleotide::*;
/// # use motifsynth::packed::encode;
/// assert_eq!(encode::<u64>(&[A, T, C, G]).unwrap(), 50);
/// ```
pub fn encode<W: Word>(sequence: &[Nucleotide]) -> Result<W, InvalidData> {
    if sequence.len() > W::CAPACITY {
        return Err(InvalidData);
    }
    Ok(pack(sequence))
}

/// Unpack `length` nucleotides from a word.
///
/// Pairs are read from the highest (offset `length - 1`) to the lowest,
/// which restores the original left-to-right order.
///
/// # Errors
///
/// Returns [`InvalidData`] if `length` exceeds the word capacity.
pub fn decode<W: Word>(value: W, length: usize) -> Result<Vec<Nucleotide>, InvalidData> {
    if length > W::CAPACITY {
        return Err(InvalidData);
    }
    Ok(unpack(value, length))
}

/// Pack the reverse complement of a nucleotide sequence.
///
/// The forward encoding is computed first, then its pairs are folded back
/// from the lowest to the highest with both bits flipped, so no reversed
/// copy of the sequence is ever built.
///
/// # Example
/// ```
/// # use motifsynth::abc::Nucleotide::*;
/// # use motifsynth::packed::*;
/// let rc = reverse_complement_encode::<u64>(&[A, T, C, G]).unwrap();
/// assert_eq!(rc, encode(&[C, G, A, T]).unwrap());
/// ```
pub fn reverse_complement_encode<W: Word>(sequence: &[Nucleotide]) -> Result<W, InvalidData> {
    let forward = encode::<W>(sequence)?;
    Ok(flip(forward, sequence.len()))
}

/// Compute the reverse complement of a sequence symbol by symbol.
pub fn reverse_complement(sequence: &[Nucleotide]) -> Vec<Nucleotide> {
    sequence.iter().rev().map(|n| n.complement()).collect()
}

/// Pack a sequence that is known to fit in the word.
#[inline]
pub(crate) fn pack<W: Word>(sequence: &[Nucleotide]) -> W {
    debug_assert!(sequence.len() <= W::CAPACITY);
    sequence
        .iter()
        .fold(W::default(), |acc, n| acc.push(n.code()))
}

/// Unpack `length` nucleotides, with `length` known to fit in the word.
#[inline]
pub(crate) fn unpack<W: Word>(value: W, length: usize) -> Vec<Nucleotide> {
    debug_assert!(length <= W::CAPACITY);
    (0..length)
        .rev()
        .map(|i| Nucleotide::from_bits(value.field(i)))
        .collect()
}

/// Reverse-complement the lowest `length` pairs of a packed value.
#[inline]
pub(crate) fn flip<W: Word>(value: W, length: usize) -> W {
    (0..length).fold(W::default(), |acc, i| acc.push(value.field(i) ^ 0b11))
}

// --- PackedSequence ----------------------------------------------------------

/// A nucleotide sequence packed in a word, together with its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedSequence<W: Word = u64> {
    value: W,
    length: usize,
}

impl<W: Word> PackedSequence<W> {
    /// Pack the given nucleotide sequence.
    pub fn encode(sequence: &[Nucleotide]) -> Result<Self, InvalidData> {
        let value = encode(sequence)?;
        Ok(Self {
            value,
            length: sequence.len(),
        })
    }

    /// Create a packed sequence from a raw bitfield and its length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidData`] if `length` exceeds the word capacity, or if
    /// `value` has bits set above the `length` lowest pairs.
    pub fn from_raw(value: W, length: usize) -> Result<Self, InvalidData> {
        if length > W::CAPACITY || value.and(W::mask(length)) != value {
            return Err(InvalidData);
        }
        Ok(Self { value, length })
    }

    /// The raw bitfield.
    #[inline]
    pub fn value(&self) -> W {
        self.value
    }

    /// The number of packed nucleotides.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check whether the packed sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Get the nucleotide at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Nucleotide {
        assert!(index < self.length, "index out of bounds");
        Nucleotide::from_bits(self.value.field(self.length - 1 - index))
    }

    /// Unpack the nucleotides.
    pub fn decode(&self) -> Vec<Nucleotide> {
        unpack(self.value, self.length)
    }

    /// Get the packed reverse complement of this sequence.
    pub fn reverse_complement(&self) -> Self {
        Self {
            value: flip(self.value, self.length),
            length: self.length,
        }
    }
}

impl<W: Word> Display for PackedSequence<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for i in (0..self.length).rev() {
            write!(f, "{}", Nucleotide::from_bits(self.value.field(i)).as_char())?;
        }
        Ok(())
    }
}

// --- KmerWindows -------------------------------------------------------------

/// An iterator over the packed codes of every `k`-mer of a sequence.
///
/// The first window is packed in full, then each following window is
/// obtained by shifting in the next symbol and masking out the oldest one.
#[derive(Debug, Clone)]
pub struct KmerWindows<'a, W: Word = u64> {
    sequence: &'a [Nucleotide],
    mask: W,
    code: W,
    next: usize,
    first: bool,
}

impl<'a, W: Word> KmerWindows<'a, W> {
    /// Create a new iterator over the `k`-mers of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidData`] if `k` is zero, longer than the sequence,
    /// or does not fit in the word.
    pub fn new(sequence: &'a [Nucleotide], k: usize) -> Result<Self, InvalidData> {
        if k == 0 || k > sequence.len() {
            return Err(InvalidData);
        }
        let code = encode(&sequence[..k])?;
        Ok(Self {
            sequence,
            mask: W::mask(k),
            code,
            next: k,
            first: true,
        })
    }
}

impl<W: Word> Iterator for KmerWindows<'_, W> {
    type Item = W;

    fn next(&mut self) -> Option<Self::Item> {
        if self.first {
            self.first = false;
            return Some(self.code);
        }
        let base = self.sequence.get(self.next)?;
        self.code = self.code.push(base.code()).and(self.mask);
        self.next += 1;
        Some(self.code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.first as usize + (self.sequence.len() - self.next);
        (n, Some(n))
    }
}

impl<W: Word> ExactSizeIterator for KmerWindows<'_, W> {}

impl<W: Word> FusedIterator for KmerWindows<'_, W> {}

#[cfg(test)]
mod test {
    use super::*;

    use crate::abc::Nucleotide::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode::<u64>(&[A, T, C, G]), Ok(50));
        assert_eq!(encode::<u32>(&[]), Ok(0));
        assert_eq!(encode::<u32>(&[T; 16]), Ok(u32::MAX));
        assert_eq!(encode::<u32>(&[T; 17]), Err(InvalidData));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(50u64, 4), Ok(vec![A, T, C, G]));
        assert_eq!(decode(50u64, 6), Ok(vec![A, A, A, T, C, G]));
        assert_eq!(decode(0u32, 0), Ok(vec![]));
        assert_eq!(decode(0u32, 17), Err(InvalidData));
    }

    #[test]
    fn test_reverse_complement_encode() {
        let rc = reverse_complement_encode::<u64>(&[A, T, C, G]).unwrap();
        assert_eq!(rc, encode::<u64>(&[C, G, A, T]).unwrap());
        assert_eq!(decode(rc, 4), Ok(vec![C, G, A, T]));
        // leading adenines become trailing thymines
        let rc = reverse_complement_encode::<u32>(&[A, A, C]).unwrap();
        assert_eq!(decode(rc, 3), Ok(vec![G, T, T]));
    }

    #[test]
    fn test_packed_sequence() {
        let packed = PackedSequence::<u64>::encode(&[G, A, T, T, A, C, A]).unwrap();
        assert_eq!(packed.len(), 7);
        assert_eq!(packed.get(0), G);
        assert_eq!(packed.get(6), A);
        assert_eq!(packed.to_string(), "GATTACA");
        assert_eq!(packed.reverse_complement().to_string(), "TGTAATC");
        assert_eq!(packed.reverse_complement().reverse_complement(), packed);
    }

    #[test]
    fn test_from_raw() {
        assert!(PackedSequence::<u32>::from_raw(50, 4).is_ok());
        assert!(PackedSequence::<u32>::from_raw(50, 2).is_err());
        assert!(PackedSequence::<u32>::from_raw(0, 17).is_err());
        assert!(PackedSequence::<u32>::from_raw(u32::MAX, 16).is_ok());
    }

    #[test]
    fn test_kmer_windows() {
        let seq = [A, T, C, G, G];
        let windows = KmerWindows::<u32>::new(&seq, 3).unwrap();
        assert_eq!(windows.len(), 3);
        let codes = windows.collect::<Vec<_>>();
        assert_eq!(
            codes,
            vec![
                encode::<u32>(&[A, T, C]).unwrap(),
                encode::<u32>(&[T, C, G]).unwrap(),
                encode::<u32>(&[C, G, G]).unwrap(),
            ]
        );
        assert!(KmerWindows::<u32>::new(&seq, 0).is_err());
        assert!(KmerWindows::<u32>::new(&seq, 6).is_err());
    }

    #[test]
    fn test_kmer_windows_full_word() {
        let seq = [C; 20];
        let codes = KmerWindows::<u32>::new(&seq, 16)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(codes.len(), 5);
        assert!(codes.iter().all(|&c| c == 0x5555_5555));
    }
}
