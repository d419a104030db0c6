use crate::utils::shell::run_checked;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::Command;

/// Generate a FastQC report for every input file.
pub fn run_fastqc(fastq_files: &[PathBuf]) -> Result<()> {
    let progress = ProgressBar::new(fastq_files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for fastq in fastq_files {
        progress.set_message(format!("fastqc {}", fastq.display()));

        let mut cmd = Command::new("fastqc");
        cmd.arg(fastq);
        run_checked(cmd, &format!("fastqc on {}", fastq.display()))?;

        progress.inc(1);
    }

    progress.finish_with_message("FastQC complete");
    Ok(())
}
