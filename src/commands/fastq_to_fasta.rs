use crate::commands::Report;
use crate::config::Config;
use crate::sequence_processor::collectors::FastaConverter;
use crate::sequence_processor::{FastqReader, SequenceReader};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::PathBuf;

pub fn run(input: PathBuf, output: Option<PathBuf>, config: &Config) -> Result<()> {
    let mut reader = FastqReader::open(&input, config.read_buffer_capacity)?;
    let mut report = Report::open(output.as_deref())?;

    let stats = {
        let mut converter = FastaConverter::new(&mut report);
        reader
            .read_sequences(&mut converter, &ProgressBar::hidden())
            .with_context(|| format!("Failed to convert {}", input.display()))?
    };
    report.finish()?;

    tracing::info!("Converted {} reads", stats.processed);
    Ok(())
}
