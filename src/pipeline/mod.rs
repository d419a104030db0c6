mod align;
mod fastq;
mod postprocess;
mod qc;
mod reference;
mod variants;

pub use fastq::{discover, pair_up, FastqPair};

use crate::utils::step_log::StepLog;
use anyhow::Result;
use std::path::PathBuf;

/// The full pipeline over one FASTQ folder. Construction discovers and pairs
/// the input files so that a missing mate fails before any tool runs.
pub struct Pipeline {
    reference: PathBuf,
    fastq_files: Vec<PathBuf>,
    pairs: Vec<FastqPair>,
    log: StepLog,
}

impl Pipeline {
    pub fn new(
        fastq_dir: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
        log_file: impl Into<PathBuf>,
    ) -> Result<Self> {
        let fastq_files = fastq::discover(&fastq_dir.into())?;
        let pairs = fastq::pair_up(&fastq_files)?;

        Ok(Pipeline {
            reference: reference.into(),
            fastq_files,
            pairs,
            log: StepLog::new(log_file),
        })
    }

    pub fn run(&self) -> Result<()> {
        println!("Indexing the reference genome...");
        reference::index(&self.reference)?;
        self.log.record(
            "Reference Genome Indexing",
            "Reference genome indexing completed successfully",
        )?;

        println!("Running FastQC on input FASTQ files...");
        qc::run_fastqc(&self.fastq_files)?;
        self.log.record("FastQC", "FastQC completed successfully")?;

        println!("Aligning reads to the reference genome...");
        align::align_pairs(&self.reference, &self.pairs)?;
        self.log
            .record("BWA Alignment", "BWA alignment completed successfully")?;

        println!("Processing alignment (SAM to BAM, sorting, and indexing)...");
        postprocess::process_alignments(&self.pairs)?;
        self.log.record(
            "SAM to BAM Conversion",
            "SAM to BAM conversion completed successfully",
        )?;

        println!("Calling variants using BCFtools...");
        variants::call_variants(&self.reference, &self.pairs)?;
        self.log
            .record("Variant Calling", "Variant calling completed successfully")?;

        Ok(())
    }
}
