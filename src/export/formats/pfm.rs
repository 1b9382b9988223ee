use crate::sequence_processor::collectors::PositionFrequencyMatrix;
use serde::Serialize;
use std::io::{self, Write};

pub const PFM_HEADER: &str = "Position, A, C, G, T";

/// Writes the header row then one `position, a, c, g, t` row per position.
pub fn write_pfm<W: Write + ?Sized>(matrix: &PositionFrequencyMatrix, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", PFM_HEADER)?;
    for (position, [a, c, g, t]) in matrix.rows().iter().enumerate() {
        writeln!(writer, "{}, {}, {}, {}, {}", position, a, c, g, t)?;
    }
    Ok(())
}

/// File name the matrix is written to, e.g. `22_pfm.txt`.
pub fn pfm_file_name(seq_length: usize) -> String {
    format!("{}_pfm.txt", seq_length)
}

#[derive(Debug, Serialize)]
#[allow(non_snake_case)]
pub struct PfmRow {
    pub position: usize,
    pub A: u64,
    pub C: u64,
    pub G: u64,
    pub T: u64,
}

#[derive(Debug, Serialize)]
pub struct PfmExport {
    pub seq_length: usize,
    pub rows: Vec<PfmRow>,
}

impl PfmExport {
    pub fn from_matrix(matrix: &PositionFrequencyMatrix) -> Self {
        Self {
            seq_length: matrix.seq_length(),
            rows: matrix
                .rows()
                .iter()
                .enumerate()
                .map(|(position, &[a, c, g, t])| PfmRow {
                    position,
                    A: a,
                    C: c,
                    G: g,
                    T: t,
                })
                .collect(),
        }
    }
}
