use super::stats::ProcessingStats;
use crate::error::Result;

/// Consumes records one at a time and accumulates a result.
pub trait RecordProcessor {
    type Record;

    /// Handle one record. Returns `true` when the record was kept or counted,
    /// `false` when it was skipped.
    fn process_record(&mut self, record: &Self::Record) -> Result<bool>;

    fn update_progress(&mut self, _stats: &ProcessingStats) {}

    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Processors whose partial results can be combined, e.g. one per input file.
pub trait MergeProcessor: RecordProcessor + Sized {
    fn merge_processor(&mut self, other: Self) -> Result<()>;
}
