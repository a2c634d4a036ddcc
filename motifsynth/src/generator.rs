//! Random synthesis of position weight matrices.

use log::debug;
use log::trace;
use rand::distributions::Distribution;
use rand::distributions::Uniform;
use rand::Rng;

use super::abc::Alphabet;
use super::abc::Dna;
use super::dense::DenseMatrix;
use super::err::ConfigurationError;
use super::err::Error;
use super::pwm::FrequencyMatrix;

// --- LengthRange -------------------------------------------------------------

/// A half-open range `[min, max)` of lengths to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Create a new length range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyLengthRange`] if `max <= min`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigurationError> {
        if max <= min {
            return Err(ConfigurationError::EmptyLengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a range containing a single length, i.e. `[length, length + 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::LengthOverflow`] if the exclusive bound
    /// does not fit in a `usize`.
    pub fn fixed(length: usize) -> Result<Self, ConfigurationError> {
        match length.checked_add(1) {
            Some(max) => Ok(Self { min: length, max }),
            None => Err(ConfigurationError::LengthOverflow(length)),
        }
    }

    /// The smallest length of the range.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    /// The exclusive upper bound of the range.
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// The largest length of the range.
    #[inline]
    pub fn longest(&self) -> usize {
        self.max - 1
    }

    /// Draw a length uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..self.max)
    }
}

// --- MatrixGenerator ---------------------------------------------------------

/// A generator of random position weight matrices.
///
/// Each position is built by drawing one value per symbol uniformly from
/// a log-weight range, exponentiating the values, and normalizing them so
/// they sum to one. The default range `[-4, 2)` gives motifs with a mix of
/// strongly conserved and nearly uniform positions.
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use motifsynth::generator::*;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let generator = MatrixGenerator::new(LengthRange::new(8, 12).unwrap());
/// let matrices = generator.generate(15, &mut rng).unwrap();
/// assert_eq!(matrices.len(), 15);
/// assert!(matrices.iter().all(|m| (8..12).contains(&m.len())));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    lengths: LengthRange,
    weights: (f64, f64),
}

impl MatrixGenerator {
    /// The default range for log-weights.
    pub const LOG_WEIGHTS: (f64, f64) = (-4.0, 2.0);

    /// Create a new generator for matrices with the given lengths.
    pub fn new(lengths: LengthRange) -> Self {
        Self {
            lengths,
            weights: Self::LOG_WEIGHTS,
        }
    }

    /// Use a different half-open range `[low, high)` for log-weights.
    pub fn with_log_weights(mut self, low: f64, high: f64) -> Result<Self, ConfigurationError> {
        if !(low.is_finite() && high.is_finite() && low < high && (high - low).is_finite()) {
            return Err(ConfigurationError::EmptyWeightRange { low, high });
        }
        self.weights = (low, high);
        Ok(self)
    }

    /// The range of motif lengths.
    #[inline]
    pub fn lengths(&self) -> &LengthRange {
        &self.lengths
    }

    /// Generate a single matrix.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<FrequencyMatrix<Dna>, Error> {
        let length = self.lengths.sample(rng);
        let noise = Uniform::new(self.weights.0, self.weights.1);
        let mut data = DenseMatrix::<f64, <Dna as Alphabet>::K>::new(length);
        for row in data.iter_mut() {
            for x in row.iter_mut() {
                *x = noise.sample(rng).exp();
            }
        }
        FrequencyMatrix::from_weights(data).map_err(Error::from)
    }

    /// Generate `count` matrices.
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<FrequencyMatrix<Dna>>, Error> {
        debug!(
            "Generating {} matrices with lengths in [{}, {})",
            count, self.lengths.min, self.lengths.max
        );
        let mut matrices = Vec::with_capacity(count);
        for i in 0..count {
            let matrix = self.sample(rng)?;
            trace!("Generated matrix {} of length {}", i, matrix.len());
            matrices.push(matrix);
        }
        Ok(matrices)
    }
}
