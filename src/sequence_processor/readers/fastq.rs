use super::open_input;
use crate::error::Result;
use crate::sequence_processor::core::{FastqRecords, RecordReader};
use std::io::BufRead;
use std::path::Path;

pub struct FastqReader;

impl FastqReader {
    /// Streams the 4-line records of a FASTQ file, gzip or plain.
    pub fn open(path: &Path, capacity: usize) -> Result<FastqRecords<Box<dyn BufRead>>> {
        let reader = open_input(path, capacity)?;
        Ok(RecordReader::new(reader, path.into()))
    }
}
