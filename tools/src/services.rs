use std::process::{Command, ExitStatus};

use anyhow::{bail, Context};

use crate::config::SubmitConfig;

/// Regenerate the conda environment descriptor from the declarative manifest
/// (`make env`). Opaque, idempotent prerequisite; stdio is inherited so the
/// build output stays visible.
pub fn refresh_environment_descriptor(cfg: &SubmitConfig) -> anyhow::Result<()> {
    let status = Command::new(&cfg.make_bin)
        .arg("env")
        .status()
        .with_context(|| format!("failed to run `{} env`", cfg.make_bin.display()))?;
    if !status.success() {
        bail!(
            "`{} env` exited with status {:?}",
            cfg.make_bin.display(),
            status
        );
    }
    Ok(())
}

/// Hand the assembled argument vector to the submission binary and wait for
/// it. The caller propagates the exit status; nothing is retried or
/// inspected here.
pub fn submit(cfg: &SubmitConfig, argv: &[String]) -> anyhow::Result<ExitStatus> {
    Command::new(&cfg.spell_bin)
        .args(argv)
        .status()
        .with_context(|| format!("failed to launch {}", cfg.spell_bin.display()))
}
