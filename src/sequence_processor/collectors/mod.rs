pub mod fasta_converter;
pub mod identifier_join;
pub mod length_filter;
pub mod match_counter;
pub mod pfm;
pub mod reference_index;
pub mod scaffold;
pub mod tail_trimmer;

pub use fasta_converter::FastaConverter;
pub use identifier_join::{IdentifierJoin, RawReads, RawTail};
pub use length_filter::LengthFilter;
pub use match_counter::MatchCounter;
pub use pfm::{PfmBuilder, PositionFrequencyMatrix, SYMBOLS};
pub use reference_index::{ReferenceEntry, ReferenceIndex};
pub use scaffold::ScaffoldBuffer;
pub use tail_trimmer::{TailTrimmer, DEFAULT_TAIL_LENGTH};
