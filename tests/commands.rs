use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use srna_tools::cli::OutputArgs;
use srna_tools::commands;
use srna_tools::config::Config;
use srna_tools::types::ReportFormat;
use srna_tools::Error;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn read(id: &str, seq: &str) -> String {
    format!("{}\n{}\n+\n{}\n", id, seq, "I".repeat(seq.len()))
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_gz(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn read_gz(path: &Path) -> String {
    let mut text = String::new();
    GzDecoder::new(fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn setup() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        output_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    (dir, config)
}

#[test]
fn length_filter_keeps_reads_inside_the_range() {
    let (dir, config) = setup();
    let kept = read("@keep", &"A".repeat(21));
    let input = write(
        dir.path(),
        "reads.fastq",
        &format!("{}{}", kept, read("@drop", &"C".repeat(30))),
    );

    commands::filter_length::run(input, 18, Some(24), OutputArgs::default(), &config).unwrap();

    let out = fs::read_to_string(dir.path().join("trimmed_18_24_reads.fastq")).unwrap();
    assert_eq!(out, kept);
}

#[test]
fn gzipped_input_can_be_filtered_into_gzipped_output() {
    let (dir, config) = setup();
    let input = write_gz(
        dir.path(),
        "reads.fastq.gz",
        &format!("{}{}", read("@short", "ACGT"), read("@long", &"G".repeat(20))),
    );
    let output = OutputArgs {
        gzip: true,
        ..OutputArgs::default()
    };

    commands::filter_length::run(input, 18, None, output, &config).unwrap();

    let out = read_gz(&dir.path().join("trimmed_18_maxLen_reads.fastq.gz"));
    assert_eq!(out, read("@long", &"G".repeat(20)));
}

#[test]
fn invalid_bounds_fail_before_writing() {
    let (dir, config) = setup();
    let input = write(dir.path(), "reads.fastq", &read("@r", "ACGT"));

    let err = commands::filter_length::run(input, 10, Some(5), OutputArgs::default(), &config)
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn missing_output_directory_is_reported() {
    let (dir, config) = setup();
    let input = write(dir.path(), "reads.fastq", &read("@r", "ACGT"));
    let output = OutputArgs {
        output_dir: Some(dir.path().join("absent")),
        ..OutputArgs::default()
    };

    let err = commands::trim_tail::run(input, None, output, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::OutputDirectory { .. })
    ));
}

#[test]
fn tail_trimmer_cuts_long_reads_to_default_length() {
    let (dir, config) = setup();
    let long: String = "ACGT".chars().cycle().take(76).collect();
    let short = "T".repeat(70);
    let input = write(
        dir.path(),
        "reads.fq",
        &format!("{}{}", read("@long", &long), read("@short", &short)),
    );

    commands::trim_tail::run(input, None, OutputArgs::default(), &config).unwrap();

    let out = fs::read_to_string(dir.path().join("tailtrim_73_reads.fq")).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[1], &long[..73]);
    assert_eq!(lines[3].len(), 73);
    assert_eq!(lines[5], short);
    assert_eq!(lines[7].len(), 70);
}

#[test]
fn mapped_reads_take_sequence_and_quality_from_raw() {
    let (dir, config) = setup();
    let raw = write(
        dir.path(),
        "raw.fastq",
        "@r1 1:N:0:1\nACGTACGTAC\n+r1\nABCDEFGHIJ\n@r2 1:N:0:1\nGGGGCCCC\n+\n########\n",
    );
    let mapped = write(dir.path(), "mapped.fastq", &read("@r2 mapped", "GGGG"));

    commands::mapped_reads::run(raw, mapped, OutputArgs::default(), &config).unwrap();

    let out = fs::read_to_string(dir.path().join("filtered_raw.fastq")).unwrap();
    assert_eq!(out, "@r2 mapped\nGGGGCCCC\n+\n########\n");
}

#[test]
fn mapped_read_absent_from_raw_is_fatal() {
    let (dir, config) = setup();
    let raw = write(dir.path(), "raw.fastq", &read("@r1", "ACGT"));
    let mapped = write(dir.path(), "mapped.fastq", &read("@r7", "ACGT"));

    let err = commands::mapped_reads::run(raw, mapped, OutputArgs::default(), &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::LookupMiss { id }) if id == "@r7"
    ));
}

#[test]
fn pfm_over_several_files_matches_expected_counts() {
    let (dir, config) = setup();
    let a = write(dir.path(), "a.fq", &format!("{}{}", read("@1", "AACG"), read("@2", "AATT")));
    let b = write_gz(dir.path(), "b.fq.gz", &format!("{}{}", read("@3", "CCCCC"), read("@4", "GANT")));

    commands::pfm::run(vec![a, b], 4, None, false, Some(2), ReportFormat::Text, &config).unwrap();

    let out = fs::read_to_string(dir.path().join("4_pfm.txt")).unwrap();
    assert_eq!(
        out,
        "Position, A, C, G, T\n0, 2, 0, 1, 0\n1, 3, 0, 0, 0\n2, 0, 1, 0, 1\n3, 0, 0, 1, 2\n"
    );
}

#[test]
fn pfm_json_report_is_wrapped_in_an_envelope() {
    let (dir, config) = setup();
    let a = write(dir.path(), "a.fq", &read("@1", "ACGT"));

    commands::pfm::run(vec![a], 4, None, false, None, ReportFormat::Json, &config).unwrap();

    let text = fs::read_to_string(dir.path().join("4_pfm.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["type"], "PositionFrequency");
    assert_eq!(value["rows"][3]["T"], 1);
    assert_eq!(value["metadata"]["records_processed"], 1);
}

#[test]
fn mirna_counts_list_every_reference() {
    let (dir, config) = setup();
    let reads = write(
        dir.path(),
        "reads.fq",
        &format!("{}{}{}", read("@1", "ATGC"), read("@2", "ATGC"), read("@3", "TTTT")),
    );
    let mirnas = write(dir.path(), "mirna.fa", ">mir-1 MIMAT1\nAUGC\n>mir-2 MIMAT2\nCCGG\n");
    let report = dir.path().join("counts.txt");

    commands::count_mirnas::run(
        reads,
        mirnas,
        ReportFormat::Text,
        Some(report.clone()),
        false,
        &config,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(report).unwrap(),
        "AUGC\n>mir-1 MIMAT1\nCount:2\nCCGG\n>mir-2 MIMAT2\nCount:0\n"
    );
}

#[test]
fn missing_input_is_reported() {
    let (dir, config) = setup();
    let err = commands::fastq_to_fasta::run(dir.path().join("nope.fq"), None, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InputNotFound { .. })
    ));
}

#[test]
fn fastq_converts_to_fasta_file() {
    let (dir, config) = setup();
    let input = write(dir.path(), "reads.fq", &read("@r1 sample", "ACGU"));
    let output = dir.path().join("reads.fa");

    commands::fastq_to_fasta::run(input, Some(output.clone()), &config).unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), ">r1 sample\nACGU\n");
}

#[test]
fn unknown_scaffold_fails_retrieval() {
    let (dir, config) = setup();
    let genome = write_gz(dir.path(), "genome.fa.gz", ">chr1\nACGT\nACGT\n");

    let err = commands::retrieve_seq::run(genome, "chr9".to_string(), 0, 3, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::ScaffoldNotFound { .. })
    ));
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn with_bad_bytes_in_second_read() -> Vec<u8> {
    let mut bytes = read("@ok", &"A".repeat(20)).into_bytes();
    bytes.extend_from_slice(b"@bad\n");
    bytes.extend_from_slice(&[b'A', 0xff, 0xfe, b'\n']);
    bytes.extend_from_slice(b"+\nIII\n");
    bytes
}

#[test]
fn decode_error_midway_leaves_no_filtered_output() {
    let (dir, config) = setup();
    let input = dir.path().join("reads.fastq");
    fs::write(&input, with_bad_bytes_in_second_read()).unwrap();

    let err = commands::filter_length::run(input, 0, None, OutputArgs::default(), &config)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Decode { line: 6, .. })
    ));
    assert_eq!(file_names(dir.path()), vec!["reads.fastq"]);
}

#[test]
fn decode_error_in_gzipped_input_leaves_no_gzipped_output() {
    let (dir, config) = setup();
    let input = dir.path().join("reads.fastq.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder.write_all(&with_bad_bytes_in_second_read()).unwrap();
    encoder.finish().unwrap();
    let output = OutputArgs {
        gzip: true,
        ..OutputArgs::default()
    };

    let err = commands::trim_tail::run(input, Some(10), output, &config).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Decode { .. })));
    assert_eq!(file_names(dir.path()), vec!["reads.fastq.gz"]);
}

#[test]
fn lookup_miss_on_a_later_read_leaves_no_joined_output() {
    let (dir, config) = setup();
    let raw = write(dir.path(), "raw.fastq", &read("@r1", "ACGT"));
    let mapped = write(
        dir.path(),
        "mapped.fastq",
        &format!("{}{}", read("@r1", "ACGT"), read("@r9", "ACGT")),
    );

    let err = commands::mapped_reads::run(raw, mapped, OutputArgs::default(), &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::LookupMiss { id }) if id == "@r9"
    ));
    assert_eq!(file_names(dir.path()), vec!["mapped.fastq", "raw.fastq"]);
}

#[test]
fn failed_conversion_leaves_no_fasta_file() {
    let (dir, config) = setup();
    let input = dir.path().join("reads.fq");
    fs::write(&input, with_bad_bytes_in_second_read()).unwrap();
    let output = dir.path().join("reads.fa");

    assert!(commands::fastq_to_fasta::run(input, Some(output.clone()), &config).is_err());
    assert!(!output.exists());
}

#[test]
fn wrapped_mirna_sequences_are_joined() {
    let (dir, config) = setup();
    let reads = write(
        dir.path(),
        "reads.fq",
        &format!("{}{}", read("@1", "ATGCGG"), read("@2", "CCTT")),
    );
    let mirnas = write(dir.path(), "mirna.fa", ">mir1\nAUGC\nGG\n>mir2\nCCUU\n");
    let report = dir.path().join("counts.txt");

    commands::count_mirnas::run(
        reads,
        mirnas,
        ReportFormat::Text,
        Some(report.clone()),
        false,
        &config,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(report).unwrap(),
        "AUGCGG\n>mir1\nCount:1\nCCUU\n>mir2\nCount:1\n"
    );
}

#[test]
fn reversed_range_is_rejected_before_opening_the_genome() {
    let (dir, config) = setup();
    let genome = dir.path().join("absent.fa");
    let err = commands::retrieve_seq::run(genome, "chr1".to_string(), 5, 2, &config).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Validation(_))));
}
