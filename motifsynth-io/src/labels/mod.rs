//! Reader and writer for ground-truth label files.
//!
//! Each line describes the sequence at the same position in the matching
//! sequence file, with the index of the sequence, the index of the matrix
//! embedded in it (`-1` for background sequences) and the strand symbol of
//! the motif (empty for background sequences):
//! ```text
//! 0 3 +
//! 1 11 -
//! 2 -1 
//! ```

use std::io::BufRead;
use std::io::Write;

use log::warn;
use motifsynth::label::Direction;
use motifsynth::label::Label;

use crate::error::Error;
mod parse;

// ---

/// A single line of a label file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    index: usize,
    origin: Option<usize>,
    direction: Direction,
}

impl Record {
    /// Create the record for the sequence at `index` with the given label.
    pub fn new(index: usize, label: &Label) -> Self {
        Self {
            index,
            origin: label.origin(),
            direction: label.direction(),
        }
    }

    /// The index of the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The index of the embedded matrix, if any.
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

// ---

/// Write labels to the given writer, numbering them from zero.
pub fn write<'a, W, I>(mut writer: W, labels: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Label>,
{
    for (i, label) in labels.into_iter().enumerate() {
        writeln!(
            writer,
            "{} {} {}",
            i,
            label.origin_index(),
            label.direction().symbol()
        )?;
    }
    Ok(())
}

pub struct Reader<B: BufRead> {
    buffer: String,
    bufread: B,
}

impl<B: BufRead> Reader<B> {
    pub fn new(reader: B) -> Self {
        Self {
            bufread: reader,
            buffer: String::new(),
        }
    }
}

impl<B: BufRead> Iterator for Reader<B> {
    type Item = Result<Record, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        // advance to first line with content
        loop {
            self.buffer.clear();
            match self.bufread.read_line(&mut self.buffer) {
                Err(e) => return Some(Err(Error::from(e))),
                Ok(0) => return None,
                Ok(_) if self.buffer.trim().is_empty() => continue,
                Ok(_) => break,
            }
        }

        let line = match crate::parse::line(&self.buffer) {
            Err(e) => return Some(Err(Error::from(e))),
            Ok((_, line)) => line,
        };
        let (index, origin, direction) = match self::parse::record(line) {
            Err(e) => return Some(Err(Error::from(e))),
            Ok((_, x)) => x,
        };

        let origin = match (origin, direction) {
            (-1, Direction::NoMotif) => None,
            (i, Direction::Forward | Direction::Reverse) if i >= 0 => Some(i as usize),
            _ => {
                warn!("Inconsistent label for sequence {}: {:?}", index, line);
                return Some(Err(Error::InvalidData(Some(format!(
                    "inconsistent label for sequence {}",
                    index
                )))));
            }
        };
        Some(Ok(Record {
            index: index as usize,
            origin,
            direction,
        }))
    }
}

pub fn read<B: BufRead>(reader: B) -> self::Reader<B> {
    self::Reader::new(reader)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use motifsynth::abc::Strand;
    use motifsynth::label::Direction;
    use motifsynth::label::Embedding;
    use motifsynth::label::Label;

    fn embedded(origin: usize, strand: Strand) -> Label {
        let embedding = Embedding {
            origin,
            start: 0,
            length: 8,
        };
        Label::new(Some(embedding), strand)
    }

    #[test]
    fn test_write() {
        let labels = [
            embedded(3, Strand::Direct),
            embedded(11, Strand::Reverse),
            Label::new(None, Strand::Reverse),
        ];
        let mut out = Vec::new();
        super::write(&mut out, &labels).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 3 +\n1 11 -\n2 -1 \n"
        );
    }

    #[test]
    fn test_read() {
        let mut reader = super::read(Cursor::new("0 3 +\n1 11 -\n\n2 -1 \n3 -1"));
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.index(), 0);
        assert_eq!(record.origin(), Some(3));
        assert_eq!(record.direction(), Direction::Forward);
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.origin(), Some(11));
        assert_eq!(record.direction(), Direction::Reverse);
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.index(), 2);
        assert_eq!(record.origin(), None);
        assert_eq!(record.direction(), Direction::NoMotif);
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.index(), 3);
        assert_eq!(record.origin(), None);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_read_inconsistent() {
        for text in ["0 -1 +\n", "0 4\n", "0 -2 \n", "0 4 x\n", "x 4 +\n"] {
            let mut reader = super::read(Cursor::new(text));
            assert!(reader.next().unwrap().is_err(), "{:?}", text);
        }
    }
}
