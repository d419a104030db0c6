use clap::Parser;
use variantpipe::{cli, commands};

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Run {
            fastq_dir,
            reference,
            log_file,
            no_install,
        } => commands::run::run(fastq_dir, reference, log_file, no_install),
        cli::Commands::CheckTools { install } => commands::check_tools::run(install),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
