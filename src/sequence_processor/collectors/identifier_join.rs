use crate::error::{Error, Result};
use crate::sequence_processor::core::sequence::header_key;
use crate::sequence_processor::core::{FastqRead, RecordProcessor};
use std::collections::HashMap;
use std::io::Write;

/// The three lines of a raw read that follow its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTail {
    pub sequence: String,
    pub quality_header: String,
    pub quality: String,
}

/// Raw reads keyed by the first whitespace-delimited token of their header.
#[derive(Debug, Default)]
pub struct RawReads {
    reads: HashMap<String, RawTail>,
}

impl RawReads {
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<FastqRead>>,
    {
        let mut reads = HashMap::new();
        for record in records {
            let record = record?;
            let key = record.key().to_string();
            reads.insert(
                key,
                RawTail {
                    sequence: record.sequence,
                    quality_header: record.quality_header,
                    quality: record.quality,
                },
            );
        }
        tracing::debug!("Loaded {} raw reads", reads.len());
        Ok(Self { reads })
    }

    pub fn get(&self, header: &str) -> Option<&RawTail> {
        self.reads.get(header_key(header))
    }

    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }
}

/// Re-emits mapped reads with the sequence and quality lines of their raw read.
pub struct IdentifierJoin<W: Write> {
    raw: RawReads,
    writer: W,
}

impl<W: Write> IdentifierJoin<W> {
    pub fn new(raw: RawReads, writer: W) -> Self {
        Self { raw, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordProcessor for IdentifierJoin<W> {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        let tail = self.raw.get(&record.id).ok_or_else(|| Error::LookupMiss {
            id: record.key().to_string(),
        })?;

        let lines = [
            record.id.as_str(),
            tail.sequence.as_str(),
            tail.quality_header.as_str(),
            tail.quality.as_str(),
        ];
        for line in lines {
            self.writer
                .write_all(line.as_bytes())
                .and_then(|_| self.writer.write_all(b"\n"))
                .map_err(|e| Error::io("writing joined reads", e))?;
        }
        Ok(true)
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("flushing joined reads", e))
    }
}
