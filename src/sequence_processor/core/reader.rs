use super::processor::RecordProcessor;
use super::sequence::{FastaBuilder, FastqBuilder, RecordBuilder};
use super::stats::ProcessingStats;
use crate::error::{Error, Origin, Result};
use indicatif::ProgressBar;
use std::io::BufRead;
use std::marker::PhantomData;

const PROGRESS_INTERVAL: u64 = 10_000;

/// Lazily yields the non-blank lines of a text stream with line terminators removed.
///
/// Each item carries its 1-based line number in the underlying stream. The first
/// decoding failure is returned once and ends iteration.
pub struct LineReader<R: BufRead> {
    reader: R,
    origin: Origin,
    line_no: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, origin: Origin) -> Self {
        Self {
            reader,
            origin,
            line_no: 0,
            buf: Vec::new(),
            done: false,
        }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| Error::io(format!("reading {}", self.origin), e))?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            while matches!(self.buf.last(), Some(b'\n') | Some(b'\r')) {
                self.buf.pop();
            }
            if self.buf.is_empty() {
                continue;
            }

            let line = String::from_utf8(std::mem::take(&mut self.buf)).map_err(|source| {
                Error::Decode {
                    origin: self.origin.clone(),
                    line: self.line_no,
                    source,
                }
            })?;
            return Ok(Some(line));
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok((self.line_no, line))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Groups the lines of a [`LineReader`] into records.
///
/// FASTQ records are fixed 4-line groups; FASTA entries run to the next header
/// or EOF. A trailing incomplete record is dropped without error, so truncated
/// files yield every complete record they contain.
pub struct RecordReader<R: BufRead, B: RecordBuilder> {
    lines: LineReader<R>,
    builder: B,
    done: bool,
}

pub type FastqRecords<R> = RecordReader<R, FastqBuilder>;
pub type FastaRecords<R> = RecordReader<R, FastaBuilder>;

impl<R: BufRead, B: RecordBuilder> RecordReader<R, B> {
    pub fn new(reader: R, origin: Origin) -> Self {
        Self {
            lines: LineReader::new(reader, origin),
            builder: B::default(),
            done: false,
        }
    }

    pub fn origin(&self) -> &Origin {
        self.lines.origin()
    }
}

impl<R: BufRead, B: RecordBuilder> Iterator for RecordReader<R, B> {
    type Item = Result<B::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(item) = self.lines.next() {
            let pushed = item.and_then(|(line_no, line)| {
                self.builder.push(line, self.lines.origin(), line_no)
            });
            match pushed {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        self.done = true;
        if let Some(record) = self.builder.finish() {
            return Some(Ok(record));
        }
        let pending = self.builder.pending();
        if pending > 0 {
            tracing::debug!(
                "Dropping {} trailing line(s) of an incomplete {}-line record in {}",
                pending,
                B::ARITY,
                self.lines.origin()
            );
        }
        None
    }
}

/// Drives every record of a reader through a processor.
pub trait SequenceReader {
    type Record;

    fn read_sequences<P: RecordProcessor<Record = Self::Record>>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats>;
}

impl<R: BufRead, B: RecordBuilder> SequenceReader for RecordReader<R, B> {
    type Record = B::Record;

    fn read_sequences<P: RecordProcessor<Record = B::Record>>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        for record in self.by_ref() {
            let record = record?;
            stats.processed += 1;
            if processor.process_record(&record)? {
                stats.kept += 1;
            } else {
                stats.skipped += 1;
            }

            if stats.processed % PROGRESS_INTERVAL == 0 {
                progress.set_position(stats.processed);
                processor.update_progress(&stats);
            }
        }

        progress.set_position(stats.processed);
        processor.finalize()?;
        Ok(stats)
    }
}
