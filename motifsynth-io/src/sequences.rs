//! Reader and writer for plain sequence files, one sequence per line.
//!
//! Lines are never skipped, so the n-th line always holds the n-th sequence
//! even when some sequences are empty.

use std::io::BufRead;
use std::io::Write;

use motifsynth::abc::Dna;
use motifsynth::seq::EncodedSequence;

use crate::error::Error;
use crate::parse;

/// Write sequences to the given writer, one per line.
pub fn write<W, I>(mut writer: W, sequences: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator,
    <I as IntoIterator>::Item: AsRef<str>,
{
    for sequence in sequences {
        writer.write_all(sequence.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
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
    type Item = Result<EncodedSequence<Dna>, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.bufread.read_line(&mut self.buffer) {
            Err(e) => return Some(Err(Error::from(e))),
            Ok(0) => return None,
            Ok(_) => (),
        }
        let text = match parse::line(&self.buffer) {
            Err(e) => return Some(Err(Error::from(e))),
            Ok((_, text)) => text,
        };
        Some(EncodedSequence::encode(text).map_err(Error::from))
    }
}

pub fn read<B: BufRead>(reader: B) -> self::Reader<B> {
    self::Reader::new(reader)
}
