use super::FastqPair;
use crate::utils::shell::run_checked;
use anyhow::Result;
use std::process::Command;

/// Convert each SAM to BAM, sort it, and index the sorted result.
pub fn process_alignments(pairs: &[FastqPair]) -> Result<()> {
    for pair in pairs {
        let sam = pair.sam();
        let bam = pair.bam();
        let sorted = pair.sorted_bam();

        let mut view = Command::new("samtools");
        view.args(["view", "-S", "-b"])
            .arg(&sam)
            .arg("-o")
            .arg(&bam);
        run_checked(view, &format!("samtools view on {}", sam.display()))?;

        let mut sort = Command::new("samtools");
        sort.arg("sort").arg("-o").arg(&sorted).arg(&bam);
        run_checked(sort, &format!("samtools sort on {}", bam.display()))?;

        let mut index = Command::new("samtools");
        index.arg("index").arg(&sorted);
        run_checked(index, &format!("samtools index on {}", sorted.display()))?;
    }

    Ok(())
}
