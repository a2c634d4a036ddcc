//! Synthesis of labeled sequences with embedded motif instances.

use log::debug;
use log::trace;
use rand::Rng;

use super::abc::Background;
use super::abc::Dna;
use super::abc::Nucleotide;
use super::abc::Strand;
use super::abc::Symbol;
use super::err::ConfigurationError;
use super::err::Error;
use super::generator::LengthRange;
use super::label::Embedding;
use super::label::Label;
use super::label::SyntheticSequence;
use super::pwm::FrequencyMatrix;
use super::validate;

/// A generator of labeled background sequences with embedded motifs.
///
/// Every sequence starts as background of a random length. Unless it is
/// selected as noise, one matrix is chosen uniformly from the matrix set,
/// an instance is sampled from it and written over the background at a
/// random offset. The result is then rendered on a random strand, either
/// as drawn or as its reverse complement.
///
/// # Example
/// ```
/// # use rand::SeedableRng;
/// # use motifsynth::generator::*;
/// # use motifsynth::synth::*;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let matrices = MatrixGenerator::new(LengthRange::new(8, 12).unwrap())
///     .generate(15, &mut rng)
///     .unwrap();
/// let synthesizer = SequenceSynthesizer::new(LengthRange::new(25, 30).unwrap());
/// let sequences = synthesizer.generate(100, &matrices, &mut rng).unwrap();
/// assert_eq!(sequences.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSynthesizer {
    lengths: LengthRange,
    noise: f64,
    background: Background<Dna>,
    validation: bool,
}

impl SequenceSynthesizer {
    /// The default probability for a sequence to contain no motif.
    pub const NOISE_PROBABILITY: f64 = 0.05;

    /// Create a new synthesizer for sequences with the given lengths.
    pub fn new(lengths: LengthRange) -> Self {
        Self {
            lengths,
            noise: Self::NOISE_PROBABILITY,
            background: Background::uniform(),
            validation: true,
        }
    }

    /// Use a different probability for a sequence to contain no motif.
    pub fn with_noise_probability(mut self, noise: f64) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&noise) {
            return Err(ConfigurationError::InvalidProbability(noise));
        }
        self.noise = noise;
        Ok(self)
    }

    /// Use a different background composition.
    pub fn with_background(mut self, background: Background<Dna>) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable the strand encoder check on every sequence.
    pub fn with_validation(mut self, validation: bool) -> Self {
        self.validation = validation;
        self
    }

    /// The range of sequence lengths.
    #[inline]
    pub fn lengths(&self) -> &LengthRange {
        &self.lengths
    }

    /// The probability for a sequence to contain no motif.
    #[inline]
    pub fn noise_probability(&self) -> f64 {
        self.noise
    }

    /// Check that every matrix can be embedded in at least one length.
    ///
    /// A matrix that is at least as long as the longest sequence can never
    /// be placed, so it is reported before any sequence is drawn.
    pub fn check_matrices(
        &self,
        matrices: &[FrequencyMatrix<Dna>],
    ) -> Result<(), ConfigurationError> {
        if self.noise >= 1.0 {
            return Ok(());
        }
        if matrices.is_empty() {
            return Err(ConfigurationError::NoMatrices);
        }
        let longest = self.lengths.longest();
        for (i, matrix) in matrices.iter().enumerate() {
            if matrix.len() >= longest {
                return Err(ConfigurationError::MotifTooLong {
                    motif: i,
                    motif_length: matrix.len(),
                    sequence_length: longest,
                });
            }
        }
        Ok(())
    }

    /// Generate a single labeled sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if a motif must be embedded but
    /// `matrices` is empty, or if the drawn length is too short for the
    /// selected matrix. Returns a [`ValidationError`](crate::err::ValidationError)
    /// if validation is enabled and the strand encoder disagrees with the
    /// rendered sequence.
    pub fn synthesize<R: Rng>(
        &self,
        matrices: &[FrequencyMatrix<Dna>],
        rng: &mut R,
    ) -> Result<SyntheticSequence, Error> {
        let length = self.lengths.sample(rng);
        let mut bases = self.background.sample(length, rng)?;

        let embedding = if rng.gen_bool(self.noise) {
            None
        } else {
            Some(self.embed(&mut bases, matrices, rng)?)
        };

        let strand = if rng.gen_bool(0.5) {
            Strand::Direct
        } else {
            Strand::Reverse
        };
        let sequence = render(&bases, strand);

        if self.validation {
            validate::check(&sequence, &bases, strand)?;
        }

        Ok(SyntheticSequence::new(sequence, Label::new(embedding, strand)))
    }

    /// Generate `count` labeled sequences.
    ///
    /// The batch is aborted on the first error, no partial output is
    /// returned.
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        matrices: &[FrequencyMatrix<Dna>],
        rng: &mut R,
    ) -> Result<Vec<SyntheticSequence>, Error> {
        debug!(
            "Generating {} sequences with lengths in [{}, {}) from {} matrices",
            count,
            self.lengths.min(),
            self.lengths.max(),
            matrices.len()
        );
        if count > 0 {
            self.check_matrices(matrices)?;
        }

        let mut sequences = Vec::with_capacity(count);
        for i in 0..count {
            let sequence = self.synthesize(matrices, rng)?;
            trace!(
                "Generated sequence {} (origin={}, strand={:?}): {}",
                i,
                sequence.label().origin_index(),
                sequence.label().strand(),
                sequence.sequence()
            );
            sequences.push(sequence);
        }

        debug!(
            "Generated {} sequences, {} with an embedded motif",
            sequences.len(),
            sequences
                .iter()
                .filter(|s| s.label().origin().is_some())
                .count()
        );
        Ok(sequences)
    }

    fn embed<R: Rng>(
        &self,
        bases: &mut [Nucleotide],
        matrices: &[FrequencyMatrix<Dna>],
        rng: &mut R,
    ) -> Result<Embedding, Error> {
        if matrices.is_empty() {
            return Err(ConfigurationError::NoMatrices.into());
        }
        let origin = rng.gen_range(0..matrices.len());
        let matrix = &matrices[origin];
        if bases.len() <= matrix.len() {
            return Err(ConfigurationError::MotifTooLong {
                motif: origin,
                motif_length: matrix.len(),
                sequence_length: bases.len(),
            }
            .into());
        }

        // the last position is never covered by the motif
        let start = rng.gen_range(0..bases.len() - matrix.len());
        let instance = matrix.sample(rng)?;
        bases[start..start + instance.len()].copy_from_slice(&instance);

        Ok(Embedding {
            origin,
            start,
            length: instance.len(),
        })
    }
}

/// Render nucleotides as text on the given strand.
///
/// The reverse strand is read backwards through the complementary letters.
pub fn render(bases: &[Nucleotide], strand: Strand) -> String {
    match strand {
        Strand::Direct => bases.iter().map(Symbol::as_char).collect(),
        Strand::Reverse => bases
            .iter()
            .rev()
            .map(|n| n.complement_ascii() as char)
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    use crate::abc::Nucleotide::*;
    use crate::dense::DenseMatrix;

    fn poly_c(length: usize) -> FrequencyMatrix<Dna> {
        let data = DenseMatrix::from_rows(vec![[0.0, 1.0, 0.0, 0.0]; length]);
        FrequencyMatrix::new(data).unwrap()
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[A, T, C, G], Strand::Direct), "ATCG");
        assert_eq!(render(&[A, T, C, G], Strand::Reverse), "CGAT");
        assert_eq!(render(&[], Strand::Reverse), "");
    }

    #[test]
    fn test_noise_probability() {
        let synthesizer = SequenceSynthesizer::new(LengthRange::fixed(10).unwrap());
        assert_eq!(synthesizer.noise_probability(), 0.05);
        assert!(synthesizer.clone().with_noise_probability(1.5).is_err());
        assert!(synthesizer.clone().with_noise_probability(-0.1).is_err());
        assert!(synthesizer.with_noise_probability(0.0).is_ok());
    }

    #[test]
    fn test_embedding() {
        let mut rng = StdRng::seed_from_u64(3);
        let background = Background::new([1.0, 0.0, 0.0, 0.0]).unwrap();
        let synthesizer = SequenceSynthesizer::new(LengthRange::new(20, 30).unwrap())
            .with_noise_probability(0.0)
            .unwrap()
            .with_background(background);
        let matrices = [poly_c(4), poly_c(6)];

        for sequence in synthesizer.generate(200, &matrices, &mut rng).unwrap() {
            let label = sequence.label();
            let embedding = label.embedding().unwrap();
            assert_eq!(embedding.length, matrices[embedding.origin].len());

            let text = sequence.sequence();
            assert!((20..30).contains(&text.len()));
            assert!(embedding.start + embedding.length < text.len());

            let (motif, flank) = match label.strand() {
                Strand::Direct => ("C", "A"),
                Strand::Reverse => ("G", "T"),
            };
            assert_eq!(text.matches(motif).count(), embedding.length);
            assert_eq!(text.matches(flank).count(), text.len() - embedding.length);
            // the instance is at `start` in drawn coordinates
            let position = match label.strand() {
                Strand::Direct => embedding.start,
                Strand::Reverse => text.len() - embedding.start - embedding.length,
            };
            assert_eq!(
                &text[position..position + embedding.length],
                motif.repeat(embedding.length)
            );
        }
    }

    #[test]
    fn test_only_noise() {
        let mut rng = StdRng::seed_from_u64(3);
        let synthesizer = SequenceSynthesizer::new(LengthRange::fixed(5).unwrap())
            .with_noise_probability(1.0)
            .unwrap();
        let sequences = synthesizer.generate(50, &[], &mut rng).unwrap();
        assert!(sequences.iter().all(|s| s.label().origin().is_none()));
    }

    #[test]
    fn test_no_matrices() {
        let mut rng = StdRng::seed_from_u64(3);
        let synthesizer = SequenceSynthesizer::new(LengthRange::fixed(5).unwrap());
        assert_eq!(
            synthesizer.generate(10, &[], &mut rng),
            Err(Error::Configuration(ConfigurationError::NoMatrices))
        );
        assert_eq!(synthesizer.generate(0, &[], &mut rng), Ok(Vec::new()));
    }

    #[test]
    fn test_motif_too_long() {
        let mut rng = StdRng::seed_from_u64(3);
        let synthesizer = SequenceSynthesizer::new(LengthRange::new(5, 9).unwrap());
        let result = synthesizer.generate(10, &[poly_c(3), poly_c(8)], &mut rng);
        assert_eq!(
            result,
            Err(Error::Configuration(ConfigurationError::MotifTooLong {
                motif: 1,
                motif_length: 8,
                sequence_length: 8,
            }))
        );
    }

    #[test]
    fn test_synthesize_short_draw() {
        // lengths in [3, 8) only fit the motif in some draws
        let synthesizer = SequenceSynthesizer::new(LengthRange::new(3, 8).unwrap())
            .with_noise_probability(0.0)
            .unwrap();
        let matrices = [poly_c(5)];
        let mut rng = StdRng::seed_from_u64(11);
        let results = (0..100)
            .map(|_| synthesizer.synthesize(&matrices, &mut rng))
            .collect::<Vec<_>>();
        assert!(results.iter().any(|r| r.is_ok()));
        assert!(results.iter().any(|r| matches!(
            r,
            Err(Error::Configuration(ConfigurationError::MotifTooLong { .. }))
        )));
    }
}
