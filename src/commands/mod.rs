pub mod config;
pub mod count_mirnas;
pub mod fastq_to_fasta;
pub mod filter_length;
pub mod mapped_reads;
pub mod pfm;
pub mod retrieve_seq;
pub mod trim_tail;

use crate::utils::output::Sink;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::{Path, PathBuf};

/// Report destination: a file when given, stdout otherwise.
pub(crate) enum Report {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(Sink),
}

impl Report {
    pub(crate) fn open(output: Option<&Path>) -> Result<Self> {
        Ok(match output {
            Some(path) => Report::File(
                Sink::create(path, false)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Report::Stdout(BufWriter::new(io::stdout().lock())),
        })
    }

    /// Flushes stdout, or moves a finished report file into place.
    pub(crate) fn finish(self) -> Result<()> {
        match self {
            Report::Stdout(mut out) => out.flush().context("Failed to write to stdout"),
            Report::File(sink) => Ok(sink.finish()?),
        }
    }
}

impl Write for Report {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Report::Stdout(w) => w.write(buf),
            Report::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Report::Stdout(w) => w.flush(),
            Report::File(w) => w.flush(),
        }
    }
}

pub(crate) fn announce_finished(path: &Path, progress: bool) {
    if progress {
        println!("{} finished processing", path.display());
    } else {
        tracing::debug!("{} finished processing", path.display());
    }
}

pub(crate) fn output_dir(arg: Option<PathBuf>, config: &crate::config::Config) -> PathBuf {
    arg.unwrap_or_else(|| config.output_dir.clone())
}
