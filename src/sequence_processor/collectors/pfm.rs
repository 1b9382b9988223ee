use crate::error::{Error, Result};
use crate::sequence_processor::core::{FastqRead, MergeProcessor, RecordProcessor};
use serde::Serialize;

pub const SYMBOLS: [char; 4] = ['A', 'C', 'G', 'T'];

/// Per-position counts of `A`, `C`, `G` and `T` over reads of one fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionFrequencyMatrix {
    seq_length: usize,
    rows: Vec<[u64; 4]>,
}

fn symbol_index(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

impl PositionFrequencyMatrix {
    pub fn new(seq_length: usize) -> Self {
        Self {
            seq_length,
            rows: vec![[0; 4]; seq_length],
        }
    }

    pub fn seq_length(&self) -> usize {
        self.seq_length
    }

    pub fn rows(&self) -> &[[u64; 4]] {
        &self.rows
    }

    pub fn count(&self, position: usize, symbol: char) -> u64 {
        let column = SYMBOLS.iter().position(|&s| s == symbol);
        match (self.rows.get(position), column) {
            (Some(row), Some(column)) => row[column],
            _ => 0,
        }
    }

    /// Tallies `sequence` if its length matches; symbols outside `ACGT` are ignored.
    pub fn observe(&mut self, sequence: &[u8]) -> bool {
        if sequence.len() != self.seq_length {
            return false;
        }
        for (row, &base) in self.rows.iter_mut().zip(sequence) {
            if let Some(column) = symbol_index(base) {
                row[column] += 1;
            }
        }
        true
    }

    pub fn merge(&mut self, other: &PositionFrequencyMatrix) -> Result<()> {
        if other.seq_length != self.seq_length {
            return Err(Error::Validation(format!(
                "Cannot merge a length {} matrix into a length {} matrix",
                other.seq_length, self.seq_length
            )));
        }
        for (row, other_row) in self.rows.iter_mut().zip(&other.rows) {
            for (count, other_count) in row.iter_mut().zip(other_row) {
                *count += other_count;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PfmBuilder {
    matrix: PositionFrequencyMatrix,
}

impl PfmBuilder {
    pub fn new(seq_length: usize) -> Self {
        Self {
            matrix: PositionFrequencyMatrix::new(seq_length),
        }
    }

    pub fn matrix(&self) -> &PositionFrequencyMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> PositionFrequencyMatrix {
        self.matrix
    }
}

impl RecordProcessor for PfmBuilder {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        Ok(self.matrix.observe(record.sequence.as_bytes()))
    }
}

impl MergeProcessor for PfmBuilder {
    fn merge_processor(&mut self, other: Self) -> Result<()> {
        self.matrix.merge(&other.matrix)
    }
}
