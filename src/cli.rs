use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full FASTQ -> VCF pipeline over a folder of paired-end reads
    Run {
        /// Folder containing the input .fastq.gz files
        fastq_dir: String,

        /// Reference genome FASTA
        #[arg(short = 'r', long = "reference", default_value = "reference.fasta")]
        reference: String,

        /// Append-only log recording each completed step
        #[arg(long = "log-file", default_value = "pipeline.log")]
        log_file: String,

        /// Fail if a required tool is missing instead of installing it
        #[arg(long)]
        no_install: bool,
    },

    /// Report which required external tools are available on PATH
    CheckTools {
        /// Install missing tools with brew
        #[arg(long)]
        install: bool,
    },
}
