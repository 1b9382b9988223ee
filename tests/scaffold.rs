use srna_tools::{FastaReader, ScaffoldBuffer};
use std::fs;
use test_case::test_case;

const GENOME: &str = ">chr1 primary\nIGNORED\n>chr2\nAAAA\nCCCC\nGGGG\n>chr3\nTT\n";

fn chr2() -> ScaffoldBuffer {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genome.fa");
    fs::write(&path, GENOME).unwrap();
    let lines = FastaReader::open_lines(&path, 64).unwrap();
    ScaffoldBuffer::find(lines, ">chr2").unwrap()
}

#[test_case(2, 5 => "AACC"; "across a line break")]
#[test_case(0, 11 => "AAAACCCCGGGG"; "whole scaffold")]
#[test_case(10, 13 => "GGAA"; "wraps to the first line")]
#[test_case(12, 12 => "A"; "single base past the end")]
fn extracts_inclusive_ranges(start: usize, end: usize) -> String {
    chr2().extract(start, end).unwrap()
}

#[test]
fn full_range_round_trips_to_concatenation() {
    let buffer = chr2();
    assert_eq!(buffer.extract(0, buffer.len() - 1).unwrap(), buffer.concatenated());
}
