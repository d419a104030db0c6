use anyhow::{Context, Result};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only completion log. Each pipeline stage writes one entry when it
/// finishes; nothing is ever rewritten.
pub struct StepLog {
    path: PathBuf,
}

impl StepLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StepLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, step: &str, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open log file {}", self.path.display()))?;

        writeln!(
            file,
            "[{}] {}:\n{}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            step,
            message
        )
        .with_context(|| format!("Failed to write to log file {}", self.path.display()))
    }
}
