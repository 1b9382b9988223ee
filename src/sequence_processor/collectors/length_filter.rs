use crate::error::{Error, Result};
use crate::sequence_processor::core::{FastqRead, RecordProcessor};
use crate::types::LengthRange;
use std::io::Write;

/// Writes through, verbatim, only the reads whose sequence length is in range.
pub struct LengthFilter<W: Write> {
    range: LengthRange,
    writer: W,
}

impl<W: Write> LengthFilter<W> {
    pub fn new(range: LengthRange, writer: W) -> Self {
        Self { range, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordProcessor for LengthFilter<W> {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        if !self.range.contains(record.len()) {
            return Ok(false);
        }
        record
            .write_to(&mut self.writer)
            .map_err(|e| Error::io("writing filtered reads", e))?;
        Ok(true)
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("flushing filtered reads", e))
    }
}
