#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate log;
#[cfg(feature = "sampling")]
extern crate rand;
#[cfg(feature = "sampling")]
extern crate rand_distr;
extern crate typenum;

pub mod abc;
pub mod dense;
pub mod err;
#[cfg(feature = "sampling")]
pub mod generator;
pub mod label;
pub mod packed;
pub mod pwm;
pub mod seq;
#[cfg(feature = "sampling")]
pub mod synth;
pub mod validate;

pub use abc::Alphabet;
pub use abc::Background;
pub use abc::ComplementableAlphabet;
pub use abc::ComplementableSymbol;
pub use abc::Dna;
pub use abc::Nucleotide;
pub use abc::Strand;
pub use abc::Symbol;
pub use dense::DenseMatrix;
pub use err::ConfigurationError;
pub use err::Error;
pub use err::InvalidData;
pub use err::InvalidSymbol;
pub use err::ValidationError;
#[cfg(feature = "sampling")]
pub use generator::LengthRange;
#[cfg(feature = "sampling")]
pub use generator::MatrixGenerator;
pub use label::Direction;
pub use label::Label;
pub use label::SyntheticSequence;
pub use packed::PackedSequence;
pub use pwm::FrequencyMatrix;
pub use seq::EncodedSequence;
#[cfg(feature = "sampling")]
pub use synth::SequenceSynthesizer;
