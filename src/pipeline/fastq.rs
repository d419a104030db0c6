use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const FASTQ_SUFFIX: &str = ".fastq.gz";
pub const R1_SUFFIX: &str = "_R1.fastq.gz";
pub const R2_SUFFIX: &str = "_R2.fastq.gz";

/// A read-1 file together with its mate. All downstream paths (SAM, BAM,
/// sorted BAM, VCF) are derived from the read-1 name by suffix substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqPair {
    pub r1: PathBuf,
    pub r2: PathBuf,
    sample: PathBuf,
}

impl FastqPair {
    /// Build a pair from a read-1 path. `None` when the file name does not
    /// carry the read-1 suffix.
    pub fn from_r1(r1: &Path) -> Option<Self> {
        let name = r1.file_name()?.to_str()?;
        let sample_name = name.strip_suffix(R1_SUFFIX)?;

        Some(FastqPair {
            r1: r1.to_path_buf(),
            r2: r1.with_file_name(format!("{}{}", sample_name, R2_SUFFIX)),
            sample: r1.with_file_name(sample_name),
        })
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut path = self.sample.clone().into_os_string();
        path.push(suffix);
        PathBuf::from(path)
    }

    pub fn sam(&self) -> PathBuf {
        self.with_suffix(".sam")
    }

    pub fn bam(&self) -> PathBuf {
        self.with_suffix(".bam")
    }

    pub fn sorted_bam(&self) -> PathBuf {
        self.with_suffix("_sorted.bam")
    }

    pub fn vcf(&self) -> PathBuf {
        self.with_suffix(".vcf")
    }
}

/// Every `.fastq.gz` in the folder, sorted by name for a deterministic run
/// order. An empty result is a hard error.
pub fn discover(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read FASTQ folder {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(FASTQ_SUFFIX) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No FASTQ files found in {}", folder.display());
    }

    files.sort();
    Ok(files)
}

/// Pair up the read-1 files, requiring every mate to exist on disk. Files
/// without the read-1 suffix are skipped with a notice.
pub fn pair_up(files: &[PathBuf]) -> Result<Vec<FastqPair>> {
    let mut pairs = Vec::new();

    for file in files {
        match FastqPair::from_r1(file) {
            Some(pair) => {
                if !pair.r2.exists() {
                    anyhow::bail!(
                        "Paired file {} not found for {}",
                        pair.r2.display(),
                        file.display()
                    );
                }
                pairs.push(pair);
            }
            None => println!("Skipping non-R1 file: {}", file.display()),
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_paths_from_r1_name() {
        let pair = FastqPair::from_r1(Path::new("data/sampleA_R1.fastq.gz")).unwrap();

        assert_eq!(pair.r2, PathBuf::from("data/sampleA_R2.fastq.gz"));
        assert_eq!(pair.sam(), PathBuf::from("data/sampleA.sam"));
        assert_eq!(pair.bam(), PathBuf::from("data/sampleA.bam"));
        assert_eq!(pair.sorted_bam(), PathBuf::from("data/sampleA_sorted.bam"));
        assert_eq!(pair.vcf(), PathBuf::from("data/sampleA.vcf"));
    }

    #[test]
    fn rejects_files_without_r1_suffix() {
        assert!(FastqPair::from_r1(Path::new("data/sampleA_R2.fastq.gz")).is_none());
        assert!(FastqPair::from_r1(Path::new("data/sampleA.fastq.gz")).is_none());
        assert!(FastqPair::from_r1(Path::new("data/sampleA_R1.fastq")).is_none());
    }

    #[test]
    fn r1_marker_must_be_a_suffix() {
        // The marker appearing mid-name is not enough.
        assert!(FastqPair::from_r1(Path::new("data/x_R1.fastq.gz.bak")).is_none());
    }
}
