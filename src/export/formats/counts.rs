use crate::sequence_processor::collectors::{ReferenceEntry, ReferenceIndex};
use serde::Serialize;
use std::io::{self, Write};

/// Writes one `<sequence>\n<label>\nCount:<n>` block per reference entry, in
/// index order, unmatched entries included.
pub fn write_counts<W: Write + ?Sized>(index: &ReferenceIndex, writer: &mut W) -> io::Result<()> {
    for entry in index.iter() {
        writeln!(writer, "{}\n{}\nCount:{}", entry.sequence, entry.label, entry.count)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CountsExport {
    pub total_matches: u64,
    pub references: Vec<ReferenceEntry>,
}

impl CountsExport {
    pub fn from_index(index: &ReferenceIndex) -> Self {
        Self {
            total_matches: index.iter().map(|e| e.count).sum(),
            references: index.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_reported_with_its_count() {
        let mut index = ReferenceIndex::new();
        index.insert("AUGC".to_string(), ">mir1 MI0000001".to_string());
        index.insert("CCUU".to_string(), ">mir2".to_string());
        index.increment("AUGC");
        index.increment("AUGC");

        let mut out = Vec::new();
        write_counts(&index, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "AUGC\n>mir1 MI0000001\nCount:2\nCCUU\n>mir2\nCount:0\n"
        );
        assert_eq!(CountsExport::from_index(&index).total_matches, 2);
    }
}
