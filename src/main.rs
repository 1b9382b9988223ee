use clap::Parser;
use srna_tools::cli::{self, Commands};
use srna_tools::commands;
use srna_tools::config::Config;
use srna_tools::utils::logging;

fn main() {
    let args = cli::Args::parse();
    let config = Config::load();
    logging::init(&config.log_level, args.verbose);

    let result = match args.command {
        Commands::CountMirnas {
            reads,
            mirnas,
            format,
            output,
            progress,
        } => commands::count_mirnas::run(reads, mirnas, format, output, progress, &config),
        Commands::Pfm {
            inputs,
            seq_length,
            output_dir,
            progress,
            threads,
            format,
        } => commands::pfm::run(inputs, seq_length, output_dir, progress, threads, format, &config),
        Commands::FilterLength {
            input,
            min_length,
            max_length,
            output,
        } => commands::filter_length::run(input, min_length, max_length, output, &config),
        Commands::TrimTail {
            input,
            length,
            output,
        } => commands::trim_tail::run(input, length, output, &config),
        Commands::MappedReads {
            raw,
            mapped,
            output,
        } => commands::mapped_reads::run(raw, mapped, output, &config),
        Commands::RetrieveSeq {
            genome,
            scaffold,
            start,
            end,
        } => commands::retrieve_seq::run(genome, scaffold, start, end, &config),
        Commands::FastqToFasta { input, output } => {
            commands::fastq_to_fasta::run(input, output, &config)
        }
        Commands::Config { write } => commands::config::run(write, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
