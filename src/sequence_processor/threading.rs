use super::core::*;
use super::readers::FastqReader;
use crate::error::{Error, Result};
use crossbeam_channel::bounded;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::thread;

/// Runs one processor per worker over a set of FASTQ files and merges the
/// partial results. Each file is read by exactly one worker.
pub struct FilePool {
    num_threads: usize,
    buffer_capacity: usize,
}

impl FilePool {
    pub fn new(num_threads: usize, buffer_capacity: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
            buffer_capacity,
        }
    }

    pub fn run<P, F, N>(
        &self,
        paths: &[PathBuf],
        make_processor: F,
        on_file_done: N,
    ) -> Result<(P, ProcessingStats)>
    where
        P: MergeProcessor<Record = FastqRead> + Send,
        F: Fn() -> P + Sync,
        N: Fn(&Path, &ProcessingStats) + Sync,
    {
        let workers = self.num_threads.min(paths.len()).max(1);
        if workers == 1 {
            return self.run_worker(paths.iter().cloned(), make_processor(), &on_file_done);
        }

        tracing::debug!("Processing {} files on {} workers", paths.len(), workers);
        let (tx, rx) = bounded::<PathBuf>(workers * 2);

        let results: Vec<Result<(P, ProcessingStats)>> = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let rx = rx.clone();
                    let make_processor = &make_processor;
                    let on_file_done = &on_file_done;
                    s.spawn(move || self.run_worker(rx.into_iter(), make_processor(), on_file_done))
                })
                .collect();
            drop(rx);

            for path in paths {
                // Every worker has hung up, so one of them failed.
                if tx.send(path.clone()).is_err() {
                    break;
                }
            }
            drop(tx);

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut merged: Option<P> = None;
        let mut stats = ProcessingStats::default();
        for result in results {
            let (processor, worker_stats) = result?;
            stats.merge(&worker_stats);
            match merged.as_mut() {
                Some(main) => main.merge_processor(processor)?,
                None => merged = Some(processor),
            }
        }

        let merged = merged.ok_or_else(|| Error::Validation("No input files given".to_string()))?;
        Ok((merged, stats))
    }

    fn run_worker<P, I, N>(
        &self,
        paths: I,
        mut processor: P,
        on_file_done: &N,
    ) -> Result<(P, ProcessingStats)>
    where
        P: RecordProcessor<Record = FastqRead>,
        I: Iterator<Item = PathBuf>,
        N: Fn(&Path, &ProcessingStats),
    {
        let mut stats = ProcessingStats::default();
        let hidden = ProgressBar::hidden();

        for path in paths {
            let mut reader = FastqReader::open(&path, self.buffer_capacity)?;
            let file_stats = reader.read_sequences(&mut processor, &hidden)?;
            on_file_done(&path, &file_stats);
            stats.merge(&file_stats);
        }

        Ok((processor, stats))
    }
}
