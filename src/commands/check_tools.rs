use crate::utils::external_tools::{self, REQUIRED_TOOLS};
use anyhow::Result;

pub fn run(install: bool) -> Result<()> {
    let mut missing = Vec::new();

    for tool in REQUIRED_TOOLS {
        if external_tools::is_installed(tool) {
            println!("{:<10} ok", tool);
        } else {
            println!("{:<10} missing", tool);
            missing.push(tool);
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    if install {
        for tool in missing {
            external_tools::install(tool)?;
        }
        Ok(())
    } else {
        anyhow::bail!("Missing tools: {}", missing.join(", "))
    }
}
