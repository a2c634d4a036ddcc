//! Ground-truth labels attached to synthetic sequences.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

use super::abc::Strand;
use super::err::InvalidData;

// --- Direction ---------------------------------------------------------------

/// The reported orientation of an embedded motif.
///
/// Sequences without a motif are still drawn on a random strand, but the
/// strand carries no information for them, so it is reported as
/// [`Direction::NoMotif`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The motif instance reads on the forward strand.
    Forward,
    /// The motif instance reads on the reverse strand.
    Reverse,
    /// The sequence is pure background.
    NoMotif,
}

impl Direction {
    /// The symbol used for this direction in label files.
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::Forward => "+",
            Direction::Reverse => "-",
            Direction::NoMotif => "",
        }
    }

    /// The signed integer form of the direction.
    ///
    /// Background sequences use `-1` like reverse ones; the origin index
    /// is what tells them apart.
    pub fn as_i8(&self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse | Direction::NoMotif => -1,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.symbol())
    }
}

impl FromStr for Direction {
    type Err = InvalidData;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Direction::Forward),
            "-" => Ok(Direction::Reverse),
            "" => Ok(Direction::NoMotif),
            _ => Err(InvalidData),
        }
    }
}

// --- Label -------------------------------------------------------------------

/// The location of an embedded motif instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Embedding {
    /// The index of the source matrix in the matrix set.
    pub origin: usize,
    /// The offset of the first motif position, in drawn (forward) coordinates.
    pub start: usize,
    /// The length of the embedded instance.
    pub length: usize,
}

/// The ground truth for a single synthetic sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    embedding: Option<Embedding>,
    strand: Strand,
}

impl Label {
    /// Create a new label.
    pub fn new(embedding: Option<Embedding>, strand: Strand) -> Self {
        Self { embedding, strand }
    }

    /// The embedded motif instance, if any.
    #[inline]
    pub fn embedding(&self) -> Option<&Embedding> {
        self.embedding.as_ref()
    }

    /// The index of the embedded matrix, if any.
    #[inline]
    pub fn origin(&self) -> Option<usize> {
        self.embedding.map(|e| e.origin)
    }

    /// The index of the embedded matrix, or `-1` for background sequences.
    pub fn origin_index(&self) -> i64 {
        self.origin().map(|i| i as i64).unwrap_or(-1)
    }

    /// The strand the sequence was rendered on.
    #[inline]
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// The orientation of the embedded motif.
    pub fn direction(&self) -> Direction {
        match (self.embedding, self.strand) {
            (None, _) => Direction::NoMotif,
            (Some(_), Strand::Direct) => Direction::Forward,
            (Some(_), Strand::Reverse) => Direction::Reverse,
        }
    }
}

// --- SyntheticSequence -------------------------------------------------------

/// A synthetic sequence together with its ground-truth label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticSequence {
    sequence: String,
    label: Label,
}

impl SyntheticSequence {
    /// Create a new labeled sequence.
    pub fn new(sequence: String, label: Label) -> Self {
        Self { sequence, label }
    }

    /// The sequence text.
    #[inline]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The ground-truth label.
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Split into the sequence text and the label.
    pub fn into_parts(self) -> (String, Label) {
        (self.sequence, self.label)
    }
}

impl AsRef<str> for SyntheticSequence {
    fn as_ref(&self) -> &str {
        &self.sequence
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_direction() {
        let embedding = Embedding {
            origin: 3,
            start: 5,
            length: 8,
        };
        let label = Label::new(Some(embedding), Strand::Reverse);
        assert_eq!(label.origin(), Some(3));
        assert_eq!(label.origin_index(), 3);
        assert_eq!(label.direction(), Direction::Reverse);
        assert_eq!(label.direction().symbol(), "-");

        let label = Label::new(Some(embedding), Strand::Direct);
        assert_eq!(label.direction(), Direction::Forward);
        assert_eq!(label.direction().as_i8(), 1);

        let label = Label::new(None, Strand::Direct);
        assert_eq!(label.origin_index(), -1);
        assert_eq!(label.direction(), Direction::NoMotif);
        assert_eq!(label.direction().to_string(), "");
    }

    #[test]
    fn test_direction_from_str() {
        for direction in [Direction::Forward, Direction::Reverse, Direction::NoMotif] {
            assert_eq!(direction.symbol().parse(), Ok(direction));
        }
        assert!("x".parse::<Direction>().is_err());
    }
}
