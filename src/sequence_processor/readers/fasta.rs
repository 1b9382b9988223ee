use super::open_input;
use crate::error::Result;
use crate::sequence_processor::core::{FastaRecords, LineReader, RecordReader};
use std::io::BufRead;
use std::path::Path;

pub type ScaffoldLines = LineReader<Box<dyn BufRead>>;

pub struct FastaReader;

impl FastaReader {
    /// Streams header/sequence entries of a FASTA file, joining wrapped sequence lines.
    pub fn open(path: &Path, capacity: usize) -> Result<FastaRecords<Box<dyn BufRead>>> {
        let reader = open_input(path, capacity)?;
        Ok(RecordReader::new(reader, path.into()))
    }

    /// Streams the raw lines of a FASTA file, for multi-line entries.
    pub fn open_lines(path: &Path, capacity: usize) -> Result<ScaffoldLines> {
        let reader = open_input(path, capacity)?;
        Ok(LineReader::new(reader, path.into()))
    }
}
