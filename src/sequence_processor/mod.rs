pub mod collectors;
pub mod core;
pub mod readers;
pub mod threading;

// Re-export commonly used items
pub use core::{FastaEntry, FastqRead, ProcessingStats, RecordProcessor, SequenceReader};
pub use readers::{FastaReader, FastqReader};
