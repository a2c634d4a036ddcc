//! Reader and writer for single matrices in plain frequency format.
//!
//! The matrix is stored transposed, with one line per symbol in alphabet
//! order, each holding the space-separated frequencies of that symbol at
//! every motif position:
//! ```text
//! 0.179 0.210 0.182 0.025
//! 0.268 0.218 0.213 0.900
//! 0.383 0.352 0.340 0.050
//! 0.170 0.220 0.265 0.025
//! ```
//!
//! Frequencies are written with three decimals, so positions are
//! renormalized when a matrix is read back. A matrix must have at least
//! one position to be read.

use std::io::BufRead;
use std::io::Read;
use std::io::Write;

use log::debug;
use motifsynth::abc::Alphabet;
use motifsynth::abc::Dna;
use motifsynth::pwm::FrequencyMatrix;

use crate::error::Error;

mod parse;

/// Write a frequency matrix to the given writer.
pub fn write<W: Write, A: Alphabet>(
    mut writer: W,
    matrix: &FrequencyMatrix<A>,
) -> Result<(), Error> {
    for column in matrix.matrix().columns_iter() {
        let mut first = true;
        for x in column {
            if !first {
                writer.write_all(b" ")?;
            }
            write!(writer, "{:.3}", x)?;
            first = false;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a frequency matrix from the given reader.
pub fn read<B: BufRead>(mut reader: B) -> Result<FrequencyMatrix<Dna>, Error> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    let (rest, columns) = self::parse::matrix(&buffer)?;
    if !rest.trim().is_empty() {
        return Err(Error::InvalidData(Some(String::from(
            "unexpected content after matrix",
        ))));
    }
    let data = self::parse::build_matrix(columns, Dna::symbols()).map_err(|_| {
        Error::InvalidData(Some(String::from("matrix rows have different lengths")))
    })?;
    if data.rows() == 0 {
        return Err(Error::InvalidData(Some(String::from(
            "matrix has no positions",
        ))));
    }
    debug!("Read matrix with {} positions", data.rows());
    FrequencyMatrix::from_weights(data).map_err(|_| {
        Error::InvalidData(Some(String::from(
            "position weights must be finite, non-negative and not all zero",
        )))
    })
}
