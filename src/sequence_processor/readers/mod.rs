mod fasta;
mod fastq;

pub use fasta::{FastaReader, ScaffoldLines};
pub use fastq::FastqReader;

use crate::error::{Error, Result};
use niffler::get_reader;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

pub const DEFAULT_BUFFER_CAPACITY: usize = 1024 * 1024;

// niffler needs a few bytes to sniff the format; anything shorter is plain text.
const MIN_SNIFF_LEN: u64 = 5;

/// Opens a possibly compressed file for buffered line reading.
pub fn open_input(path: &Path, capacity: usize) -> Result<Box<dyn BufRead>> {
    if !path.is_file() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
    let len = file
        .metadata()
        .map_err(|e| Error::io(format!("inspecting {}", path.display()), e))?
        .len();

    let inner: Box<dyn Read> = if len < MIN_SNIFF_LEN {
        Box::new(file)
    } else {
        let (inner, compression) = get_reader(Box::new(file))?;
        tracing::debug!("Opened {} ({:?})", path.display(), compression);
        inner
    };

    Ok(Box::new(BufReader::with_capacity(capacity.max(1), inner)))
}
