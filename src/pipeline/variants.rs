use super::FastqPair;
use crate::utils::shell::run_bash;
use anyhow::{Context, Result};
use std::path::Path;

fn call_command(reference: &Path, pair: &FastqPair) -> String {
    format!(
        "bcftools mpileup -Ou -f {} {} | bcftools call -mv -o {}",
        reference.display(),
        pair.sorted_bam().display(),
        pair.vcf().display()
    )
}

/// Pileup and call variants for every sorted BAM, one VCF per sample.
pub fn call_variants(reference: &Path, pairs: &[FastqPair]) -> Result<()> {
    for pair in pairs {
        run_bash(&call_command(reference, pair), "bcftools mpileup | call").with_context(
            || format!("Error calling variants for {}", pair.sorted_bam().display()),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_piped_call_command() {
        let pair = FastqPair::from_r1(Path::new("reads/s1_R1.fastq.gz")).unwrap();
        let cmd = call_command(Path::new("reference.fasta"), &pair);

        assert_eq!(
            cmd,
            "bcftools mpileup -Ou -f reference.fasta reads/s1_sorted.bam \
             | bcftools call -mv -o reads/s1.vcf"
        );
    }
}
