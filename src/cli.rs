use crate::types::ReportFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Small RNA read processing tools", long_about = None)]
pub struct Args {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how a command writes its output file.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Directory for the output file (default from config, else current directory)
    #[arg(long = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// Gzip the output file
    #[arg(long)]
    pub gzip: bool,

    /// Report progress on the terminal
    #[arg(long)]
    pub progress: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count reads exactly matching each miRNA sequence
    CountMirnas {
        /// Small RNA reads (FASTQ, optionally gzipped)
        reads: PathBuf,
        /// miRNA reference (two-line FASTA, optionally gzipped)
        mirnas: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Write the report here instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
        /// Show a spinner while reading
        #[arg(long)]
        progress: bool,
    },

    /// Build a position frequency matrix from reads of one length
    Pfm {
        /// Input FASTQ files, optionally gzipped
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,
        /// Length of reads to count
        seq_length: usize,
        /// Directory for <seq_length>_pfm.txt
        #[arg(long = "output_dir")]
        output_dir: Option<PathBuf>,
        /// Print when each file has finished processing
        #[arg(long)]
        progress: bool,
        /// Worker threads, one file per worker at a time
        #[arg(long)]
        threads: Option<usize>,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Keep reads whose length lies in an inclusive range
    FilterLength {
        /// Input FASTQ file, optionally gzipped
        input: PathBuf,
        /// Minimum read length
        #[arg(long = "min_length", default_value_t = 0, allow_negative_numbers = true)]
        min_length: i64,
        /// Maximum read length (unbounded if unset)
        #[arg(long = "max_length", allow_negative_numbers = true)]
        max_length: Option<i64>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Cut sequence and quality lines down to a maximum length
    TrimTail {
        /// Input FASTQ file, optionally gzipped
        input: PathBuf,
        /// Length to keep (default from config, else 73)
        #[arg(long)]
        length: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Recover raw sequence and quality lines for mapped reads
    MappedReads {
        /// Raw reads (FASTQ, optionally gzipped)
        raw: PathBuf,
        /// Mapped reads (FASTQ, optionally gzipped)
        mapped: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print bases start..=end (zero-based) of a scaffold
    RetrieveSeq {
        /// Genome FASTA file, optionally gzipped
        genome: PathBuf,
        /// Scaffold or chromosome name, with or without '>'
        scaffold: String,
        /// First base, zero-based
        start: usize,
        /// Last base, inclusive
        end: usize,
    },

    /// Convert FASTQ reads to FASTA entries
    FastqToFasta {
        /// Input FASTQ file, optionally gzipped
        input: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration, or persist it with --write
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}
