use clap::Args;

/// Target interpreter invocation shared by the submitter binaries.
///
/// Everything after the program name is captured verbatim, including leading
/// hyphens, and forwarded to the remote host after placeholder resolution.
#[derive(Debug, Clone, Args)]
pub struct TargetCommandArgs {
    /// Python entry point and its arguments (e.g. `-m riemann.train -u lr=0.01`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "PYTHON_ARGS")]
    pub command: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TargetCommandOpts {
    pub command: Vec<String>,
}

impl From<&TargetCommandArgs> for TargetCommandOpts {
    fn from(args: &TargetCommandArgs) -> Self {
        TargetCommandOpts {
            command: args.command.clone(),
        }
    }
}
