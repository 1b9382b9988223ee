use super::reference_index::ReferenceIndex;
use crate::error::Result;
use crate::sequence_processor::core::{FastqRead, RecordProcessor};

/// Counts reads whose sequence, read in the RNA alphabet, exactly equals an
/// indexed reference sequence.
pub struct MatchCounter {
    index: ReferenceIndex,
    rna: String,
}

impl MatchCounter {
    pub fn new(index: ReferenceIndex) -> Self {
        Self {
            index,
            rna: String::new(),
        }
    }

    pub fn into_index(self) -> ReferenceIndex {
        self.index
    }
}

fn transcribe_into(dna: &str, out: &mut String) {
    out.clear();
    out.extend(dna.chars().map(|c| if c == 'T' { 'U' } else { c }));
}

impl RecordProcessor for MatchCounter {
    type Record = FastqRead;

    fn process_record(&mut self, record: &FastqRead) -> Result<bool> {
        transcribe_into(&record.sequence, &mut self.rna);
        Ok(self.index.increment(&self.rna))
    }
}
