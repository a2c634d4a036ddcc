//! Error types for the synthesis and encoding routines.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

// --- InvalidSymbol -----------------------------------------------------------

/// The given character is not a valid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol(pub char);

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid symbol: {:?}", self.0)
    }
}

impl std::error::Error for InvalidSymbol {}

// --- InvalidData -------------------------------------------------------------

/// Invalid data was passed to initialize a matrix or a packed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidData;

impl Display for InvalidData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("invalid data")
    }
}

impl std::error::Error for InvalidData {}

// --- ConfigurationError ------------------------------------------------------

/// The generation parameters cannot produce any output.
///
/// None of these are recoverable by retrying with the same parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The half-open length range `[min, max)` is empty.
    EmptyLengthRange { min: usize, max: usize },
    /// A single length too large for its exclusive bound to be represented.
    LengthOverflow(usize),
    /// The half-open log-weight range `[low, high)` is empty or not finite.
    EmptyWeightRange { low: f64, high: f64 },
    /// A motif does not fit inside a sequence of the given length.
    MotifTooLong {
        motif: usize,
        motif_length: usize,
        sequence_length: usize,
    },
    /// A motif must be embedded but no matrices were given.
    NoMatrices,
    /// A probability outside of `[0, 1]`.
    InvalidProbability(f64),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::EmptyLengthRange { min, max } => {
                write!(f, "empty length range: [{}, {})", min, max)
            }
            ConfigurationError::LengthOverflow(length) => {
                write!(f, "length range starting at {} overflows", length)
            }
            ConfigurationError::EmptyWeightRange { low, high } => {
                write!(f, "empty log-weight range: [{}, {})", low, high)
            }
            ConfigurationError::MotifTooLong {
                motif,
                motif_length,
                sequence_length,
            } => write!(
                f,
                "motif {} of length {} does not fit in a sequence of length {}",
                motif, motif_length, sequence_length
            ),
            ConfigurationError::NoMatrices => f.write_str("no matrices to embed"),
            ConfigurationError::InvalidProbability(p) => {
                write!(f, "invalid probability: {}", p)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

// --- ValidationError ---------------------------------------------------------

/// The strand encoder disagrees with a directly generated sequence.
///
/// This always denotes a defect in the encoder itself, never bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The forward encode/decode round-trip differs from the sequence text.
    EncodingMismatch { expected: String, observed: String },
    /// The closed-form reverse complement differs from the sequence text.
    ReverseComplementMismatch { expected: String, observed: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ValidationError::EncodingMismatch { expected, observed } => write!(
                f,
                "encoding mismatch: expected {}, observed {}",
                expected, observed
            ),
            ValidationError::ReverseComplementMismatch { expected, observed } => write!(
                f,
                "reverse complement mismatch: expected {}, observed {}",
                expected, observed
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

// --- Error -------------------------------------------------------------------

/// Any error that can abort a generation batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidData(InvalidData),
    Configuration(ConfigurationError),
    Validation(ValidationError),
}

impl From<InvalidData> for Error {
    fn from(error: InvalidData) -> Self {
        Error::InvalidData(error)
    }
}

impl From<ConfigurationError> for Error {
    fn from(error: ConfigurationError) -> Self {
        Error::Configuration(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::InvalidData(e) => e.fmt(f),
            Error::Configuration(e) => e.fmt(f),
            Error::Validation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidData(e) => Some(e),
            Error::Configuration(e) => Some(e),
            Error::Validation(e) => Some(e),
        }
    }
}
