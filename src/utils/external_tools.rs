use anyhow::{Context, Result};
use std::process::{Command, Stdio};

pub const REQUIRED_TOOLS: [&str; 4] = ["fastqc", "bwa", "samtools", "bcftools"];

/// A tool counts as installed when `which` resolves it on PATH.
pub fn is_installed(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

pub fn install(tool: &str) -> Result<()> {
    let status = Command::new("brew")
        .args(["install", tool])
        .status()
        .with_context(|| format!("Failed to run brew install {}", tool))?;

    if !status.success() {
        anyhow::bail!("brew install {} exited with {}", tool, status);
    }
    Ok(())
}

/// Check every required tool, installing the missing ones when
/// `install_missing` is set and failing otherwise.
pub fn ensure_tools(install_missing: bool) -> Result<()> {
    for tool in REQUIRED_TOOLS {
        if is_installed(tool) {
            continue;
        }
        if install_missing {
            install(tool)?;
        } else {
            anyhow::bail!(
                "{} not found. Please install it (e.g. brew install {}) and ensure it's in your PATH",
                tool,
                tool
            );
        }
    }
    Ok(())
}
