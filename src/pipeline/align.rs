use super::FastqPair;
use crate::utils::shell::run_bash;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// bwa mem expects uncompressed mates; process substitution streams the
/// gunzip output without touching the filesystem.
fn bwa_mem_command(reference: &Path, pair: &FastqPair) -> String {
    format!(
        "bwa mem {} <(gunzip -c {}) <(gunzip -c {}) > {}",
        reference.display(),
        pair.r1.display(),
        pair.r2.display(),
        pair.sam().display()
    )
}

/// Align every pair against the reference, writing one SAM per sample.
pub fn align_pairs(reference: &Path, pairs: &[FastqPair]) -> Result<()> {
    let progress = ProgressBar::new(pairs.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for pair in pairs {
        progress.set_message(format!("bwa mem {}", pair.r1.display()));

        run_bash(&bwa_mem_command(reference, pair), "bwa mem")
            .with_context(|| format!("Error aligning reads for {}", pair.r1.display()))?;

        progress.inc(1);
    }

    progress.finish_with_message("Alignment complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_process_substitution_command() {
        let pair = FastqPair::from_r1(Path::new("reads/s1_R1.fastq.gz")).unwrap();
        let cmd = bwa_mem_command(Path::new("reference.fasta"), &pair);

        assert_eq!(
            cmd,
            "bwa mem reference.fasta <(gunzip -c reads/s1_R1.fastq.gz) \
             <(gunzip -c reads/s1_R2.fastq.gz) > reads/s1.sam"
        );
    }
}
