use crate::pipeline::Pipeline;
use crate::utils::external_tools;
use anyhow::Result;

pub fn run(fastq_dir: String, reference: String, log_file: String, no_install: bool) -> Result<()> {
    external_tools::ensure_tools(!no_install)?;

    let pipeline = Pipeline::new(fastq_dir, reference, log_file)?;
    pipeline.run()
}
