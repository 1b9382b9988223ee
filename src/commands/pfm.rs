use crate::commands::{announce_finished, output_dir};
use crate::config::Config;
use crate::export::formats::pfm::{pfm_file_name, write_pfm, PfmExport};
use crate::export::{AnalysisData, AnalysisExport, ExportMetadata};
use crate::sequence_processor::collectors::PfmBuilder;
use crate::sequence_processor::threading::FilePool;
use crate::types::ReportFormat;
use crate::utils::output::{check_output_dir, Sink};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, FILES_TEMPLATE};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub fn run(
    inputs: Vec<PathBuf>,
    seq_length: usize,
    output_dir_arg: Option<PathBuf>,
    progress: bool,
    threads: Option<usize>,
    format: ReportFormat,
    config: &Config,
) -> Result<()> {
    let dir = output_dir(output_dir_arg, config);
    check_output_dir(&dir)?;

    let threads = threads.unwrap_or(config.threads);
    let pb = ProgressBarBuilder::new(format!("Counting {}-mers", seq_length))
        .with_template(FILES_TEMPLATE)
        .with_length(inputs.len() as u64)
        .visible(progress)
        .build()?;

    let pool = FilePool::new(threads, config.read_buffer_capacity);
    let (builder, stats) = pool.run(
        &inputs,
        || PfmBuilder::new(seq_length),
        |path, _| {
            pb.suspend(|| announce_finished(path, progress));
            pb.inc(1);
        },
    )?;
    pb.finish_and_clear();
    tracing::info!(
        "{} of {} reads had length {}",
        stats.kept,
        stats.processed,
        seq_length
    );

    let matrix = builder.into_matrix();
    let path = match format {
        ReportFormat::Text => dir.join(pfm_file_name(seq_length)),
        ReportFormat::Json => dir.join(format!("{}_pfm.json", seq_length)),
    };
    let mut writer = Sink::create(&path, false)?;

    match format {
        ReportFormat::Text => write_pfm(&matrix, &mut writer)?,
        ReportFormat::Json => {
            let export = AnalysisExport::new(
                AnalysisData::PositionFrequency(PfmExport::from_matrix(&matrix)),
                ExportMetadata {
                    inputs: inputs.iter().map(|p| p.display().to_string()).collect(),
                    records_processed: stats.processed,
                },
            );
            writeln!(writer, "{}", export.to_json()?)?;
        }
    }
    writer
        .finish()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());

    Ok(())
}
