use crate::error::{Error, Result};
use crate::sequence_processor::core::{FastqRead, RecordProcessor};
use bio::io::fasta;
use std::io::Write;

/// Rewrites FASTQ reads as FASTA entries, dropping the quality lines.
pub struct FastaConverter<W: Write> {
    writer: fasta::Writer<W>,
}

impl<W: Write> FastaConverter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: fasta::Writer::new(writer),
        }
    }
}

impl<W: Write> RecordProcessor for FastaConverter<W> {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        let header = record.id.strip_prefix('@').unwrap_or(&record.id);
        let (id, desc) = match header.split_once(char::is_whitespace) {
            Some((id, desc)) => (id, Some(desc.trim_start())),
            None => (header, None),
        };

        self.writer
            .write(id, desc, record.sequence.as_bytes())
            .map_err(|e| Error::io("writing FASTA entries", e))?;
        Ok(true)
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("flushing FASTA entries", e))
    }
}
