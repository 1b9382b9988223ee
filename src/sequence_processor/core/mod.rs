pub(crate) mod processor;
pub(crate) mod sequence;
pub(crate) mod stats;
mod reader;

pub use processor::{MergeProcessor, RecordProcessor};
pub use reader::{FastaRecords, FastqRecords, LineReader, RecordReader, SequenceReader};
pub use sequence::{FastaBuilder, FastaEntry, FastqBuilder, FastqRead, RecordBuilder};
pub use stats::ProcessingStats;
