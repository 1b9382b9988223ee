use crate::cli::OutputArgs;
use crate::commands::{announce_finished, output_dir};
use crate::config::Config;
use crate::sequence_processor::collectors::{IdentifierJoin, RawReads};
use crate::sequence_processor::{FastqReader, SequenceReader};
use crate::utils::output::{output_path, Sink};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(raw: PathBuf, mapped: PathBuf, output: OutputArgs, config: &Config) -> Result<()> {
    let gzip = output.gzip || config.gzip_output;
    let out_path = output_path(&output_dir(output.output_dir, config), "filtered", &raw, gzip)?;
    let capacity = config.read_buffer_capacity;

    let raw_reads = RawReads::from_records(FastqReader::open(&raw, capacity)?)
        .with_context(|| format!("Failed to load raw reads from {}", raw.display()))?;
    announce_finished(&raw, output.progress);

    let mut reader = FastqReader::open(&mapped, capacity)?;
    let mut join = IdentifierJoin::new(raw_reads, Sink::create(&out_path, gzip)?);

    let pb = ProgressBarBuilder::new("Joining mapped reads")
        .visible(output.progress)
        .with_tick()
        .build()?;
    let stats = reader
        .read_sequences(&mut join, &pb)
        .with_context(|| format!("Failed to join reads from {}", mapped.display()))?;
    pb.finish_and_clear();
    join.into_inner().finish()?;

    announce_finished(&mapped, output.progress);
    tracing::info!("Joined {} mapped reads into {}", stats.kept, out_path.display());
    Ok(())
}
