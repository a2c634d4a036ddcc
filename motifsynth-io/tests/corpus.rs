use std::io::Cursor;

use motifsynth::abc::Symbol;
use motifsynth::generator::LengthRange;
use motifsynth::generator::MatrixGenerator;
use motifsynth::label::Direction;
use motifsynth::label::SyntheticSequence;
use motifsynth::synth::SequenceSynthesizer;
use motifsynth_io::labels;
use motifsynth_io::pfm;
use motifsynth_io::sequences;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_matrices() {
    init();
    let mut rng = StdRng::seed_from_u64(42);
    let generator = MatrixGenerator::new(LengthRange::new(8, 12).unwrap());
    for matrix in generator.generate(15, &mut rng).unwrap() {
        let mut out = Vec::new();
        pfm::write(&mut out, &matrix).unwrap();
        assert_eq!(String::from_utf8_lossy(&out).lines().count(), 4);

        let read = pfm::read(Cursor::new(out)).unwrap();
        assert_eq!(read.len(), matrix.len());
        for (expected, observed) in matrix.matrix().iter().zip(read.matrix().iter()) {
            for (x, y) in expected.iter().zip(observed.iter()) {
                assert!((x - y).abs() < 5e-3, "{} != {}", x, y);
            }
        }
    }
}

#[test]
fn test_sequences_and_labels() {
    init();
    let mut rng = StdRng::seed_from_u64(42);
    let matrices = MatrixGenerator::new(LengthRange::new(8, 12).unwrap())
        .generate(15, &mut rng)
        .unwrap();
    let corpus = SequenceSynthesizer::new(LengthRange::new(25, 30).unwrap())
        .generate(500, &matrices, &mut rng)
        .unwrap();

    let mut out = Vec::new();
    sequences::write(&mut out, &corpus).unwrap();
    let read = sequences::read(Cursor::new(out))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(read.len(), corpus.len());
    for (sequence, encoded) in corpus.iter().zip(read.iter()) {
        let text = encoded.iter().map(Symbol::as_char).collect::<String>();
        assert_eq!(sequence.sequence(), text);
    }

    let mut out = Vec::new();
    labels::write(&mut out, corpus.iter().map(SyntheticSequence::label)).unwrap();
    let records = labels::read(Cursor::new(out))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(records.len(), corpus.len());
    for (i, (sequence, record)) in corpus.iter().zip(records.iter()).enumerate() {
        assert_eq!(*record, labels::Record::new(i, sequence.label()));
        assert_eq!(record.index(), i);
        if record.origin().is_none() {
            assert_eq!(record.direction(), Direction::NoMotif);
        }
    }
}
