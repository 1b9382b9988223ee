use crate::cli::OutputArgs;
use crate::commands::{announce_finished, output_dir};
use crate::config::Config;
use crate::sequence_processor::collectors::TailTrimmer;
use crate::sequence_processor::{FastqReader, SequenceReader};
use crate::utils::output::{output_path, Sink};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(input: PathBuf, length: Option<usize>, output: OutputArgs, config: &Config) -> Result<()> {
    let length = length.unwrap_or(config.tail_length);
    let gzip = output.gzip || config.gzip_output;
    let out_path = output_path(
        &output_dir(output.output_dir, config),
        &format!("tailtrim_{}", length),
        &input,
        gzip,
    )?;

    let mut reader = FastqReader::open(&input, config.read_buffer_capacity)?;
    let mut trimmer = TailTrimmer::new(length, Sink::create(&out_path, gzip)?);

    let pb = ProgressBarBuilder::new(format!("Trimming to {} bases", length))
        .visible(output.progress)
        .with_tick()
        .build()?;
    let stats = reader
        .read_sequences(&mut trimmer, &pb)
        .with_context(|| format!("Failed to trim {}", input.display()))?;
    pb.finish_and_clear();

    let trimmed = trimmer.trimmed();
    trimmer.into_inner().finish()?;

    announce_finished(&input, output.progress);
    tracing::info!(
        "Trimmed {} of {} reads, wrote {}",
        trimmed,
        stats.processed,
        out_path.display()
    );
    Ok(())
}
