use crate::utils::shell::run_checked;
use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Index the reference genome with `bwa index`. The index files land next to
/// the reference, so there is nothing to derive here.
pub fn index(reference: &Path) -> Result<()> {
    let mut cmd = Command::new("bwa");
    cmd.arg("index").arg(reference);
    run_checked(cmd, "bwa index")
}
