use crate::config::Config;
use crate::sequence_processor::collectors::ScaffoldBuffer;
use crate::sequence_processor::FastaReader;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub fn run(genome: PathBuf, scaffold: String, start: usize, end: usize, config: &Config) -> Result<()> {
    ScaffoldBuffer::check_range(start, end)?;

    let lines = FastaReader::open_lines(&genome, config.read_buffer_capacity)?;
    let buffer = ScaffoldBuffer::find(lines, &scaffold)
        .with_context(|| format!("Failed to read {}", genome.display()))?;
    tracing::debug!("Scaffold {} has {} bases", buffer.name(), buffer.len());

    let mut out = BufWriter::new(io::stdout().lock());
    buffer.write_range(start, end, &mut out)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
