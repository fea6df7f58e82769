use std::process::Command;

use thiserror::Error;

/// Minimum bash major version the remote command string relies on.
pub const MIN_BASH_MAJOR: u32 = 4;

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("no target command given")]
    EmptyCommand,
    #[error("SPELL_HYPER_PARAMS must be set to a non-empty sweep specification")]
    MissingSweepParams,
    #[error("bash {found} is older than the required major version {required}{hint}")]
    BashTooOld {
        found: String,
        required: u32,
        hint: &'static str,
    },
    #[error("could not determine bash version: {0}")]
    BashProbe(String),
}

/// The submitters forward the trailing arguments verbatim; zero of them is a
/// usage error, not an empty remote run.
pub fn require_command(command: &[String]) -> Result<(), PreflightError> {
    if command.is_empty() {
        return Err(PreflightError::EmptyCommand);
    }
    Ok(())
}

pub fn require_sweep_params(params: Option<&str>) -> Result<(), PreflightError> {
    match params {
        Some(p) if !p.trim().is_empty() => Ok(()),
        _ => Err(PreflightError::MissingSweepParams),
    }
}

/// Probe the host bash and compare its major version numerically.
pub fn check_bash_version() -> Result<(), PreflightError> {
    let output = Command::new("bash")
        .arg("--version")
        .output()
        .map_err(|err| PreflightError::BashProbe(err.to_string()))?;
    let text = String::from_utf8_lossy(&output.stdout);
    let first_line = text.lines().next().unwrap_or("").to_string();
    let major = parse_bash_major(&text)
        .ok_or_else(|| PreflightError::BashProbe(format!("unparseable output: {first_line:?}")))?;
    if major < MIN_BASH_MAJOR {
        return Err(PreflightError::BashTooOld {
            found: first_line,
            required: MIN_BASH_MAJOR,
            hint: remediation_hint(),
        });
    }
    Ok(())
}

/// Extract the numeric major version from `bash --version` output, e.g.
/// `GNU bash, version 5.2.15(1)-release ...` -> 5.
pub fn parse_bash_major(text: &str) -> Option<u32> {
    let rest = text.split("version ").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(target_os = "macos")]
fn remediation_hint() -> &'static str {
    "; install a newer bash with `brew install bash`"
}

#[cfg(not(target_os = "macos"))]
fn remediation_hint() -> &'static str {
    "; upgrade bash via your package manager"
}
