//! Digital encoding for nucleotide sequences using an alphabet.

use std::fmt::Debug;

use generic_array::ArrayLength;
use generic_array::GenericArray;
use typenum::consts::U4;
use typenum::marker_traits::NonZero;
use typenum::marker_traits::Unsigned;

use super::err::InvalidData;
use super::err::InvalidSymbol;

#[cfg(feature = "sampling")]
use rand::Rng;
#[cfg(feature = "sampling")]
use rand_distr::Distribution;
#[cfg(feature = "sampling")]
use rand_distr::WeightedIndex;

/// The tolerance used when checking that frequencies sum to one.
pub const TOLERANCE: f64 = 1e-9;

// --- Symbol ------------------------------------------------------------------

/// A symbol from a biological alphabet.
pub trait Symbol: Default + Sized + Copy + Eq {
    /// View this symbol as a zero-based index.
    fn as_index(&self) -> usize;
    /// View this symbol as a string character.
    fn as_char(&self) -> char {
        self.as_ascii() as char
    }
    /// Parse a string character into a symbol.
    fn from_char(c: char) -> Result<Self, InvalidSymbol> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            Err(InvalidSymbol(c))
        }
    }
    /// View this symbol as an ASCII charater.
    fn as_ascii(&self) -> u8;
    /// Parse an ASCII character into a symbol.
    fn from_ascii(c: u8) -> Result<Self, InvalidSymbol>;
}

/// A symbol that can be complemented.
pub trait ComplementableSymbol: Symbol {
    /// Get the complement of this symbol.
    fn complement(&self) -> Self;
}

// --- Alphabet ----------------------------------------------------------------

/// A biological alphabet with associated metadata.
pub trait Alphabet: Debug + Copy + Default + 'static {
    type Symbol: Symbol + Debug;
    type K: Unsigned + NonZero + ArrayLength + Debug;

    /// Get all the symbols of this alphabet, in index order.
    fn symbols() -> &'static [Self::Symbol];

    /// Get a string with all symbols from this alphabet.
    fn as_str() -> &'static str;
}

/// An alphabet that defines the complement operation.
pub trait ComplementableAlphabet: Alphabet {
    /// Get the complement of this symbol.
    fn complement(s: Self::Symbol) -> Self::Symbol;
}

impl<A: Alphabet> ComplementableAlphabet for A
where
    <A as Alphabet>::Symbol: ComplementableSymbol,
{
    fn complement(s: Self::Symbol) -> Self::Symbol {
        s.complement()
    }
}

// --- DNA ---------------------------------------------------------------------

/// The standard DNA alphabet composed of 4 deoxyribonucleotides.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dna;

impl Alphabet for Dna {
    type Symbol = Nucleotide;
    type K = U4;

    fn symbols() -> &'static [Nucleotide] {
        &[Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T]
    }

    fn as_str() -> &'static str {
        "ACGT"
    }
}

/// The letters of the forward strand, indexed by nucleotide code.
const FORWARD: [u8; 4] = *b"ACGT";
/// The letters of the complementary strand, indexed by nucleotide code.
const COMPLEMENT: [u8; 4] = *b"TGCA";

/// A deoxyribonucleotide.
///
/// The discriminant is the 2-bit code used for packing, chosen so that
/// the complement of a code `x` is always `3 - x` (i.e. `x ^ 0b11`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine.
    #[default]
    A = 0,
    /// Cytosine.
    C = 1,
    /// Guanine.
    G = 2,
    /// Thymine.
    T = 3,
}

impl Nucleotide {
    /// Get the 2-bit code of this nucleotide.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Get the nucleotide for the lowest two bits of `bits`.
    ///
    /// Higher bits are ignored, so this never fails.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Nucleotide::A,
            1 => Nucleotide::C,
            2 => Nucleotide::G,
            _ => Nucleotide::T,
        }
    }

    /// Get the nucleotide with the given integer code.
    pub fn from_code(code: u8) -> Result<Self, InvalidSymbol> {
        if code < 4 {
            Ok(Self::from_bits(code))
        } else {
            Err(InvalidSymbol(char::from_digit(code as u32, 36).unwrap_or('?')))
        }
    }

    /// Get the letter of the opposite strand at this position.
    #[inline]
    pub fn complement_ascii(&self) -> u8 {
        COMPLEMENT[self.as_index()]
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> char {
        n.as_char()
    }
}

impl From<Nucleotide> for u8 {
    fn from(n: Nucleotide) -> u8 {
        n.code()
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidSymbol;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl Symbol for Nucleotide {
    fn as_index(&self) -> usize {
        *self as usize
    }

    fn as_ascii(&self) -> u8 {
        FORWARD[self.as_index()]
    }

    fn from_ascii(c: u8) -> Result<Self, InvalidSymbol> {
        match c {
            b'A' | b'a' => Ok(Nucleotide::A),
            b'C' | b'c' => Ok(Nucleotide::C),
            b'G' | b'g' => Ok(Nucleotide::G),
            b'T' | b't' => Ok(Nucleotide::T),
            _ => Err(InvalidSymbol(c as char)),
        }
    }
}

impl ComplementableSymbol for Nucleotide {
    fn complement(&self) -> Self {
        Self::from_bits(self.code() ^ 0b11)
    }
}

// --- Strand ------------------------------------------------------------------

/// The orientation of a sequence relative to the strand it was drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strand {
    /// The sequence is read as drawn, left to right.
    #[default]
    Direct,
    /// The sequence is the reverse complement of what was drawn.
    Reverse,
}

// --- Background --------------------------------------------------------------

/// The background frequencies for an alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct Background<A: Alphabet> {
    frequencies: GenericArray<f64, A::K>,
    alphabet: std::marker::PhantomData<A>,
}

impl<A: Alphabet> Background<A> {
    /// Create a new background with the given frequencies.
    ///
    /// The array must contain valid frequencies, i.e. real numbers between
    /// zero and one that sum to one.
    pub fn new<F>(frequencies: F) -> Result<Self, InvalidData>
    where
        F: Into<GenericArray<f64, A::K>>,
    {
        let frequencies = frequencies.into();
        let mut sum = 0.0;
        for &f in frequencies.iter() {
            if !(0.0..=1.0).contains(&f) {
                return Err(InvalidData);
            }
            sum += f;
        }
        if (sum - 1.0).abs() > TOLERANCE {
            return Err(InvalidData);
        }
        Ok(Self {
            frequencies,
            alphabet: std::marker::PhantomData,
        })
    }

    /// Create a new background with uniform frequencies.
    ///
    /// # Example
    /// ```
    /// # use motifsynth::abc::*;
    /// let bg = Background::<Dna>::uniform();
    /// assert_eq!(bg.frequencies(), &[0.25, 0.25, 0.25, 0.25]);
    /// ```
    pub fn uniform() -> Self {
        let frequencies = (0..A::K::USIZE)
            .map(|_| 1.0 / (A::K::USIZE as f64))
            .collect();
        Self {
            frequencies,
            alphabet: std::marker::PhantomData,
        }
    }

    /// A reference to the raw background frequencies.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Sample a background sequence of the given length.
    #[cfg(feature = "sampling")]
    pub fn sample<R: Rng>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Vec<A::Symbol>, InvalidData> {
        let dist =
            WeightedIndex::new(self.frequencies.iter().copied()).map_err(|_| InvalidData)?;
        Ok((0..length).map(|_| A::symbols()[dist.sample(rng)]).collect())
    }
}

impl<A: Alphabet> AsRef<[f64]> for Background<A> {
    fn as_ref(&self) -> &[f64] {
        self.frequencies()
    }
}

impl<A: Alphabet> Default for Background<A> {
    fn default() -> Self {
        Self::uniform()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_background_new() {
        assert!(Background::<Dna>::new([0.3, 0.2, 0.2, 0.3]).is_ok());
        assert!(Background::<Dna>::new([0.1, 0.1, 0.1, 0.1]).is_err());
        assert!(Background::<Dna>::new([1.5, -0.5, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_complement() {
        for &n in Dna::symbols() {
            assert_eq!(n.complement().complement(), n);
            assert_eq!(n.complement().code(), 3 - n.code());
            assert_eq!(n.complement().as_ascii(), n.complement_ascii());
        }
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    }

    #[test]
    fn test_codes() {
        for (i, &n) in Dna::symbols().iter().enumerate() {
            assert_eq!(n.as_index(), i);
            assert_eq!(Nucleotide::from_code(i as u8), Ok(n));
            assert_eq!(n.as_char(), Dna::as_str().as_bytes()[i] as char);
        }
        assert!(Nucleotide::from_code(4).is_err());
        assert_eq!(Nucleotide::from_bits(0b110), Nucleotide::G);
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(Nucleotide::from_ascii(b'g'), Ok(Nucleotide::G));
        assert_eq!(Nucleotide::from_char('T'), Ok(Nucleotide::T));
        assert_eq!(Nucleotide::from_char('N'), Err(InvalidSymbol('N')));
        assert_eq!(Nucleotide::from_char('é'), Err(InvalidSymbol('é')));
    }

    #[cfg(feature = "sampling")]
    #[test]
    fn test_background_sample() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let bg = Background::<Dna>::new([0.0, 0.0, 1.0, 0.0]).unwrap();
        let seq = bg.sample(20, &mut rng).unwrap();
        assert_eq!(seq.len(), 20);
        assert!(seq.iter().all(|&n| n == Nucleotide::G));
    }
}
