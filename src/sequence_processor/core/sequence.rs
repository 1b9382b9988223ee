use crate::error::{Error, Origin, Result};
use std::io::Write;

/// One FASTA header line and the sequence line paired with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaEntry {
    pub header: String,
    pub sequence: String,
}

/// One 4-line FASTQ record, lines kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRead {
    pub id: String,
    pub sequence: String,
    pub quality_header: String,
    pub quality: String,
}

impl FastqRead {
    /// Sequence length in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// First whitespace-delimited token of the header line, `@` included.
    pub fn key(&self) -> &str {
        header_key(&self.id)
    }

    pub fn lines(&self) -> [&str; 4] {
        [&self.id, &self.sequence, &self.quality_header, &self.quality]
    }

    /// Writes the four lines, each newline-terminated.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

pub(crate) fn header_key(header: &str) -> &str {
    header.split_whitespace().next().unwrap_or("")
}

/// Assembles records from consecutive lines.
///
/// Each implementation is a small state machine: every pushed line advances the
/// state, and the final line of a record emits it and resets to the first state.
pub trait RecordBuilder: Default {
    type Record;

    /// Number of lines making up one record, the minimum where sequences may wrap.
    const ARITY: usize;

    fn push(
        &mut self,
        line: String,
        origin: &Origin,
        line_no: usize,
    ) -> Result<Option<Self::Record>>;

    /// Called once at end of input; emits a record that only EOF can complete.
    fn finish(&mut self) -> Option<Self::Record> {
        None
    }

    /// Number of lines buffered towards an unfinished record.
    fn pending(&self) -> usize;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FastqState {
    #[default]
    Header,
    Sequence,
    QualHeader,
    Quality,
}

#[derive(Debug, Default)]
pub struct FastqBuilder {
    state: FastqState,
    id: String,
    sequence: String,
    quality_header: String,
}

impl RecordBuilder for FastqBuilder {
    type Record = FastqRead;

    const ARITY: usize = 4;

    fn push(
        &mut self,
        line: String,
        origin: &Origin,
        line_no: usize,
    ) -> Result<Option<FastqRead>> {
        match self.state {
            FastqState::Header => {
                self.id = line;
                self.state = FastqState::Sequence;
            }
            FastqState::Sequence => {
                self.sequence = line;
                self.state = FastqState::QualHeader;
            }
            FastqState::QualHeader => {
                self.quality_header = line;
                self.state = FastqState::Quality;
            }
            FastqState::Quality => {
                self.state = FastqState::Header;
                let read = FastqRead {
                    id: std::mem::take(&mut self.id),
                    sequence: std::mem::take(&mut self.sequence),
                    quality_header: std::mem::take(&mut self.quality_header),
                    quality: line,
                };

                let quality_len = read.quality.chars().count();
                if read.len() != quality_len {
                    return Err(Error::MalformedRecord {
                        origin: origin.clone(),
                        line: line_no,
                        reason: format!(
                            "sequence length {} does not match quality length {}",
                            read.len(),
                            quality_len
                        ),
                    });
                }

                return Ok(Some(read));
            }
        }

        Ok(None)
    }

    fn pending(&self) -> usize {
        match self.state {
            FastqState::Header => 0,
            FastqState::Sequence => 1,
            FastqState::QualHeader => 2,
            FastqState::Quality => 3,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FastaState {
    #[default]
    Header,
    Sequence,
}

#[derive(Debug, Default)]
pub struct FastaBuilder {
    state: FastaState,
    header: String,
    sequence: String,
}

impl FastaBuilder {
    fn take_entry(&mut self) -> FastaEntry {
        FastaEntry {
            header: std::mem::take(&mut self.header),
            sequence: std::mem::take(&mut self.sequence),
        }
    }
}

impl RecordBuilder for FastaBuilder {
    type Record = FastaEntry;

    const ARITY: usize = 2;

    fn push(
        &mut self,
        line: String,
        origin: &Origin,
        line_no: usize,
    ) -> Result<Option<FastaEntry>> {
        match self.state {
            FastaState::Header => {
                if !line.starts_with('>') {
                    return Err(Error::MalformedRecord {
                        origin: origin.clone(),
                        line: line_no,
                        reason: "sequence line before the first '>' header".to_string(),
                    });
                }
                self.header = line;
                self.state = FastaState::Sequence;
                Ok(None)
            }
            FastaState::Sequence if line.starts_with('>') => {
                if self.sequence.is_empty() {
                    tracing::debug!(
                        "Skipping {} before line {} in {}: no sequence lines",
                        self.header,
                        line_no,
                        origin
                    );
                    self.header = line;
                    return Ok(None);
                }
                let entry = self.take_entry();
                self.header = line;
                Ok(Some(entry))
            }
            FastaState::Sequence => {
                self.sequence.push_str(&line);
                Ok(None)
            }
        }
    }

    fn finish(&mut self) -> Option<FastaEntry> {
        if self.state == FastaState::Sequence && !self.sequence.is_empty() {
            self.state = FastaState::Header;
            return Some(self.take_entry());
        }
        None
    }

    fn pending(&self) -> usize {
        match self.state {
            FastaState::Header => 0,
            FastaState::Sequence => 1,
        }
    }
}
