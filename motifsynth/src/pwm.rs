//! Position weight matrices storing symbol probabilities at each position.

use std::ops::Index;

#[cfg(feature = "sampling")]
use rand::Rng;
#[cfg(feature = "sampling")]
use rand_distr::Distribution;
#[cfg(feature = "sampling")]
use rand_distr::WeightedIndex;

use super::abc::Alphabet;
use super::abc::TOLERANCE;
use super::dense::DenseMatrix;
use super::err::InvalidData;
use super::seq::EncodedSequence;

// --- FrequencyMatrix ---------------------------------------------------------

/// A matrix storing symbol frequencies at each position.
///
/// Each row is a probability distribution over the alphabet: all values
/// are non-negative and sum to one. The number of rows is the length of
/// the motif and never changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyMatrix<A: Alphabet> {
    alphabet: std::marker::PhantomData<A>,
    data: DenseMatrix<f64, A::K>,
}

impl<A: Alphabet> FrequencyMatrix<A> {
    /// Create a new frequency matrix without checking the contents.
    fn new_unchecked(data: DenseMatrix<f64, A::K>) -> Self {
        Self {
            alphabet: std::marker::PhantomData,
            data,
        }
    }

    /// Create a new frequency matrix.
    ///
    /// Every row must be a probability distribution, i.e. contain
    /// non-negative values summing to one.
    pub fn new(data: DenseMatrix<f64, A::K>) -> Result<Self, InvalidData> {
        for row in data.iter() {
            if row.iter().any(|&x| x.is_nan() || x < 0.0) {
                return Err(InvalidData);
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > TOLERANCE {
                return Err(InvalidData);
            }
        }
        Ok(Self::new_unchecked(data))
    }

    /// Create a new frequency matrix by normalizing each row of weights.
    ///
    /// This is used to recover distributions from positive weights, or
    /// from probabilities that were rounded when written to disk.
    pub fn from_weights(mut data: DenseMatrix<f64, A::K>) -> Result<Self, InvalidData> {
        for row in data.iter_mut() {
            if row.iter().any(|&x| !x.is_finite() || x < 0.0) {
                return Err(InvalidData);
            }
            let mut sum: f64 = row.iter().sum();
            if !sum.is_finite() {
                // large finite weights can overflow the sum
                let max = row.iter().copied().fold(0.0, f64::max);
                for x in row.iter_mut() {
                    *x /= max;
                }
                sum = row.iter().sum();
            }
            if !(sum > 0.0 && sum.is_finite()) {
                return Err(InvalidData);
            }
            for x in row.iter_mut() {
                *x /= sum;
            }
        }
        Ok(Self::new_unchecked(data))
    }

    /// The length of the motif encoded in this matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Check whether the matrix has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.rows() == 0
    }

    /// The raw frequencies of the matrix.
    #[inline]
    pub fn matrix(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }

    /// Get the most likely sequence for this matrix.
    ///
    /// Ties are resolved in favour of the symbol with the lowest index.
    pub fn consensus(&self) -> EncodedSequence<A> {
        self.data
            .iter()
            .map(|row| {
                let mut best = 0;
                for (j, &x) in row.iter().enumerate() {
                    if x > row[best] {
                        best = j;
                    }
                }
                A::symbols()[best]
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Sample an instance of the motif, one symbol per position.
    ///
    /// Each position is drawn independently from the categorical
    /// distribution given by the corresponding row.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidData`] if a row cannot be used as a sampling
    /// distribution.
    #[cfg(feature = "sampling")]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Vec<A::Symbol>, InvalidData> {
        let mut instance = Vec::with_capacity(self.len());
        for row in self.data.iter() {
            let dist = WeightedIndex::new(row.iter().copied()).map_err(|_| InvalidData)?;
            instance.push(A::symbols()[dist.sample(rng)]);
        }
        Ok(instance)
    }
}

impl<A: Alphabet> AsRef<DenseMatrix<f64, A::K>> for FrequencyMatrix<A> {
    fn as_ref(&self) -> &DenseMatrix<f64, A::K> {
        &self.data
    }
}

impl<A: Alphabet> AsRef<FrequencyMatrix<A>> for FrequencyMatrix<A> {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl<A: Alphabet> Index<usize> for FrequencyMatrix<A> {
    type Output = [f64];
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
