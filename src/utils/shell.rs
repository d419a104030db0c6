use anyhow::{Context, Result};
use std::process::Command;

/// Run a command to completion, treating a non-zero exit status as an error.
pub fn run_checked(mut cmd: Command, what: &str) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {}", what))?;

    if !status.success() {
        anyhow::bail!("{} exited with {}", what, status);
    }
    Ok(())
}

/// Run a command line through bash. Process substitution and pipes cannot be
/// expressed as a plain argv.
pub fn run_bash(command_line: &str, what: &str) -> Result<()> {
    let mut cmd = Command::new("bash");
    cmd.arg("-c").arg(command_line);
    run_checked(cmd, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_checked_reports_nonzero_exit() {
        let mut cmd = Command::new("false");
        cmd.stdout(std::process::Stdio::null());
        let err = run_checked(cmd, "false").unwrap_err();
        assert!(err.to_string().contains("false exited with"));
    }

    #[test]
    fn run_bash_passes_through_exit_status() {
        assert!(run_bash("exit 0", "noop").is_ok());
        assert!(run_bash("exit 3", "noop").is_err());
    }
}
