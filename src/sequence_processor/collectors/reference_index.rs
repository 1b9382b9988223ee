use crate::error::Result;
use crate::sequence_processor::core::FastaEntry;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub sequence: String,
    pub label: String,
    pub count: u64,
}

/// Reference sequences keyed by their exact sequence string.
///
/// Iteration follows first-insertion order. Inserting a sequence that is already
/// present replaces its label and count but keeps its position.
#[derive(Debug, Default, Clone)]
pub struct ReferenceIndex {
    entries: Vec<ReferenceEntry>,
    positions: HashMap<String, usize>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from header/sequence pairs, headers kept verbatim.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<FastaEntry>>,
    {
        let mut index = Self::new();
        for entry in entries {
            let entry = entry?;
            index.insert(entry.sequence, entry.header);
        }
        tracing::debug!("Reference index holds {} sequences", index.len());
        Ok(index)
    }

    pub fn insert(&mut self, sequence: String, label: String) {
        match self.positions.get(&sequence) {
            Some(&pos) => {
                tracing::trace!("Duplicate reference sequence {}, replacing label", sequence);
                let entry = &mut self.entries[pos];
                entry.label = label;
                entry.count = 0;
            }
            None => {
                self.positions.insert(sequence.clone(), self.entries.len());
                self.entries.push(ReferenceEntry {
                    sequence,
                    label,
                    count: 0,
                });
            }
        }
    }

    pub fn get(&self, sequence: &str) -> Option<&ReferenceEntry> {
        self.positions.get(sequence).map(|&pos| &self.entries[pos])
    }

    /// Increments the count of `sequence`; returns `false` when it is not indexed.
    pub fn increment(&mut self, sequence: &str) -> bool {
        match self.positions.get(sequence) {
            Some(&pos) => {
                self.entries[pos].count += 1;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(header: &str, sequence: &str) -> Result<FastaEntry> {
        Ok(FastaEntry {
            header: header.to_string(),
            sequence: sequence.to_string(),
        })
    }

    #[test]
    fn later_duplicates_overwrite_in_place() {
        let index = ReferenceIndex::from_entries(vec![
            entry(">mir1", "UGAG"),
            entry(">mir2", "CCUA"),
            entry(">mir3", "UGAG"),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        let labels: Vec<_> = index.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec![">mir3", ">mir2"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut index = ReferenceIndex::new();
        index.insert("UGAG".to_string(), ">mir1".to_string());

        assert!(index.increment("UGAG"));
        assert!(!index.increment("ugag"));
        assert_eq!(index.get("UGAG").unwrap().count, 1);
    }
}
