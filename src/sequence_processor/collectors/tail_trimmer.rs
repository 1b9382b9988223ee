use crate::error::{Error, Result};
use crate::sequence_processor::core::{FastqRead, RecordProcessor};
use std::io::Write;

pub const DEFAULT_TAIL_LENGTH: usize = 73;

/// Cuts sequence and quality lines longer than the target length back to it.
pub struct TailTrimmer<W: Write> {
    target: usize,
    writer: W,
    trimmed: u64,
}

fn truncate_chars(line: &str, len: usize) -> &str {
    match line.char_indices().nth(len) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

impl<W: Write> TailTrimmer<W> {
    pub fn new(target: usize, writer: W) -> Self {
        Self {
            target,
            writer,
            trimmed: 0,
        }
    }

    /// Number of reads that had at least one line shortened.
    pub fn trimmed(&self) -> u64 {
        self.trimmed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_read(&mut self, record: &FastqRead) -> std::io::Result<bool> {
        let sequence = truncate_chars(&record.sequence, self.target);
        let quality = truncate_chars(&record.quality, self.target);
        let lines = [
            record.id.as_str(),
            sequence,
            record.quality_header.as_str(),
            quality,
        ];
        for line in lines {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        Ok(sequence.len() != record.sequence.len() || quality.len() != record.quality.len())
    }
}

impl<W: Write> RecordProcessor for TailTrimmer<W> {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        let trimmed = self
            .write_read(record)
            .map_err(|e| Error::io("writing trimmed reads", e))?;
        if trimmed {
            self.trimmed += 1;
        }
        Ok(true)
    }

    fn finalize(&mut self) -> Result<()> {
        tracing::debug!("Trimmed {} reads to {} bases", self.trimmed, self.target);
        self.writer
            .flush()
            .map_err(|e| Error::io("flushing trimmed reads", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(len: usize) -> FastqRead {
        let sequence: String = "ACGT".chars().cycle().take(len).collect();
        FastqRead {
            id: "@read with description that is rather long for a header".to_string(),
            sequence,
            quality_header: "+".to_string(),
            quality: "I".repeat(len),
        }
    }

    #[test]
    fn long_lines_lose_their_excess_tail() {
        let original = read(76);
        let mut trimmer = TailTrimmer::new(73, Vec::new());
        trimmer.process_record(&original).unwrap();

        let out = String::from_utf8(trimmer.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], original.id);
        assert_eq!(lines[1], &original.sequence[..73]);
        assert_eq!(lines[3].len(), 73);
    }

    #[test]
    fn short_reads_pass_unchanged() {
        let original = read(70);
        let mut trimmer = TailTrimmer::new(73, Vec::new());
        trimmer.process_record(&original).unwrap();

        assert_eq!(trimmer.trimmed(), 0);
        let mut expected = Vec::new();
        original.write_to(&mut expected).unwrap();
        assert_eq!(trimmer.into_inner(), expected);
    }
}
