use proptest::prelude::*;
use srna_tools::error::Origin;
use srna_tools::sequence_processor::core::{FastqRecords, RecordReader};
use std::io::Cursor;

fn base() -> impl Strategy<Value = char> {
    prop_oneof![Just('A'), Just('C'), Just('G'), Just('T'), Just('N')]
}

fn fastq_text(seqs: &[String], leftover: usize) -> String {
    let mut text = String::new();
    for (i, seq) in seqs.iter().enumerate() {
        text.push_str(&format!("@read{} 1:N:0\n{}\n+\n{}\n", i, seq, "F".repeat(seq.len())));
    }
    for line in ["@partial", "ACGT", "+"].iter().take(leftover) {
        text.push_str(line);
        text.push('\n');
    }
    text
}

proptest! {
    #[test]
    fn whole_groups_become_records(
        seqs in proptest::collection::vec(proptest::collection::vec(base(), 1..40), 0..50),
        leftover in 0usize..4,
    ) {
        let seqs: Vec<String> = seqs.into_iter().map(|s| s.into_iter().collect()).collect();
        let text = fastq_text(&seqs, leftover);
        let reader: FastqRecords<_> = RecordReader::new(Cursor::new(text.into_bytes()), Origin::unnamed());

        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(records.len(), seqs.len());
        for (record, seq) in records.iter().zip(&seqs) {
            prop_assert_eq!(&record.sequence, seq);
            prop_assert_eq!(record.sequence.len(), record.quality.len());
        }
    }
}
