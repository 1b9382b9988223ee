use crate::cli::OutputArgs;
use crate::commands::{announce_finished, output_dir};
use crate::config::Config;
use crate::sequence_processor::collectors::LengthFilter;
use crate::sequence_processor::{FastqReader, SequenceReader};
use crate::types::LengthRange;
use crate::utils::output::{output_path, Sink};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    min_length: i64,
    max_length: Option<i64>,
    output: OutputArgs,
    config: &Config,
) -> Result<()> {
    let range = LengthRange::new(min_length, max_length)?;
    let gzip = output.gzip || config.gzip_output;
    let out_path = output_path(
        &output_dir(output.output_dir, config),
        &format!("trimmed_{}", range.to_output_name()),
        &input,
        gzip,
    )?;

    let mut reader = FastqReader::open(&input, config.read_buffer_capacity)?;
    let sink = Sink::create(&out_path, gzip)?;
    let mut filter = LengthFilter::new(range, sink);

    let pb = ProgressBarBuilder::new(format!("Filtering to {}", range))
        .visible(output.progress)
        .with_tick()
        .build()?;
    let stats = reader
        .read_sequences(&mut filter, &pb)
        .with_context(|| format!("Failed to filter {}", input.display()))?;
    pb.finish_and_clear();
    filter.into_inner().finish()?;

    announce_finished(&input, output.progress);
    tracing::info!(
        "Kept {} of {} reads in {}, wrote {}",
        stats.kept,
        stats.processed,
        range,
        out_path.display()
    );
    Ok(())
}
