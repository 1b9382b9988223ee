pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod sequence_processor;
pub mod types;
pub mod utils;

// Re-export main API
pub use error::{Error, Result};
pub use sequence_processor::collectors::{PositionFrequencyMatrix, ReferenceIndex, ScaffoldBuffer};
pub use sequence_processor::{FastaReader, FastqRead, FastqReader};
