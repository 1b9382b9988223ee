#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed: u64,
    pub kept: u64,
    pub skipped: u64,
}

impl ProcessingStats {
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.processed += other.processed;
        self.kept += other.kept;
        self.skipped += other.skipped;
    }
}
