use crate::error::{Error, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of `input` without any trailing `.gz`.
pub fn input_basename(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".gz") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Fails unless `dir` exists and is a directory.
pub fn check_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(Error::OutputDirectory {
            path: dir.to_path_buf(),
        })
    }
}

/// `<output_dir>/<prefix>_<basename>[.gz]`.
pub fn output_path(output_dir: &Path, prefix: &str, input: &Path, gzip: bool) -> Result<PathBuf> {
    check_output_dir(output_dir)?;
    let mut name = format!("{}_{}", prefix, input_basename(input));
    if gzip {
        name.push_str(".gz");
    }
    Ok(output_dir.join(name))
}

enum SinkWriter {
    Plain(BufWriter<NamedTempFile>),
    Gzip(GzEncoder<BufWriter<NamedTempFile>>),
}

/// Buffered output file, gzip-compressed on request.
///
/// Data goes to a temporary file next to the destination, which only takes the
/// destination's name in [`Sink::finish`]. A sink dropped before that, e.g. when
/// a run fails halfway, removes its temporary file and leaves nothing behind.
pub struct Sink {
    writer: SinkWriter,
    dest: PathBuf,
}

impl Sink {
    pub fn create(path: &Path, gzip: bool) -> Result<Self> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir)
            .map_err(|e| Error::io(format!("creating a temporary file in {}", dir.display()), e))?;
        let writer = BufWriter::new(temp);
        tracing::debug!("Writing {} (gzip: {})", path.display(), gzip);

        Ok(Self {
            writer: if gzip {
                SinkWriter::Gzip(GzEncoder::new(writer, Compression::default()))
            } else {
                SinkWriter::Plain(writer)
            },
            dest: path.to_path_buf(),
        })
    }

    /// Writes the gzip trailer, if any, flushes, and moves the file into place.
    pub fn finish(self) -> Result<()> {
        let writer = match self.writer {
            SinkWriter::Plain(writer) => writer,
            SinkWriter::Gzip(encoder) => encoder
                .finish()
                .map_err(|e| Error::io("finishing gzip stream", e))?,
        };
        let temp = writer
            .into_inner()
            .map_err(|e| Error::io("flushing output", e.into_error()))?;
        temp.persist(&self.dest)
            .map_err(|e| Error::io(format!("writing {}", self.dest.display()), e.error))?;
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.writer {
            SinkWriter::Plain(w) => w.write(buf),
            SinkWriter::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.writer {
            SinkWriter::Plain(w) => w.flush(),
            SinkWriter::Gzip(w) => w.flush(),
        }
    }
}
