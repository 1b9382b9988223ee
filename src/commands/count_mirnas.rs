use crate::commands::{announce_finished, Report};
use crate::config::Config;
use crate::export::formats::counts::{write_counts, CountsExport};
use crate::export::{AnalysisData, AnalysisExport, ExportMetadata};
use crate::sequence_processor::collectors::{MatchCounter, ReferenceIndex};
use crate::sequence_processor::{FastaReader, FastqReader, SequenceReader};
use crate::types::ReportFormat;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn run(
    reads: PathBuf,
    mirnas: PathBuf,
    format: ReportFormat,
    output: Option<PathBuf>,
    progress: bool,
    config: &Config,
) -> Result<()> {
    let capacity = config.read_buffer_capacity;

    let references = FastaReader::open(&mirnas, capacity)?;
    let index = ReferenceIndex::from_entries(references)
        .with_context(|| format!("Failed to load miRNA sequences from {}", mirnas.display()))?;
    tracing::info!("Loaded {} miRNA sequences", index.len());

    let mut counter = MatchCounter::new(index);
    let mut reader = FastqReader::open(&reads, capacity)?;
    let pb = ProgressBarBuilder::new(format!("Counting {}", display_name(&reads)))
        .visible(progress)
        .with_tick()
        .build()?;
    let stats = reader
        .read_sequences(&mut counter, &pb)
        .with_context(|| format!("Failed to count reads in {}", reads.display()))?;
    pb.finish_and_clear();
    announce_finished(&reads, progress);
    tracing::info!("{} of {} reads matched a miRNA", stats.kept, stats.processed);

    let index = counter.into_index();
    let mut writer = Report::open(output.as_deref())?;
    match format {
        ReportFormat::Text => write_counts(&index, &mut writer)?,
        ReportFormat::Json => {
            let export = AnalysisExport::new(
                AnalysisData::MirnaCounts(CountsExport::from_index(&index)),
                ExportMetadata {
                    inputs: vec![reads.display().to_string(), mirnas.display().to_string()],
                    records_processed: stats.processed,
                },
            );
            writeln!(writer, "{}", export.to_json()?)?;
        }
    }
    writer.finish().context("Failed to write miRNA counts")?;

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
