use super::common::{SubmitMode, SubmitPlan, APT_PACKAGES, ENV_EVAL_DATA, ENV_GLOVE};
use super::placeholders::{resolve_args, resolve_tokens, REMOTE_ROOT};

/// Remote-side argument dumper, re-invoked with the substituted arguments so
/// the run log records exactly what was forwarded.
const REMOTE_DUMP_HELPER: &str = "python scripts/dump_args.py";

/// The caller's arguments after placeholder resolution, shell-quoted and
/// joined for embedding in the remote command.
pub fn quoted_command(plan: &SubmitPlan<'_>) -> String {
    resolve_args(&plan.command)
        .iter()
        .map(|arg| quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assemble the remote command string: enter the remote root, rebuild the
/// remote environment, dump the forwarded arguments, export the forwarded
/// environment, then run the target interpreter with the remote root on the
/// module search path.
pub fn build_remote_command(plan: &SubmitPlan<'_>) -> String {
    let command = quoted_command(plan);
    let eval_data = resolve_tokens(&plan.eval_data_path);
    let glove = resolve_tokens(&plan.glove_path);
    [
        format!("cd {REMOTE_ROOT}"),
        "make env".to_string(),
        format!("{REMOTE_DUMP_HELPER} {command}"),
        format!("export {ENV_EVAL_DATA}=\"{eval_data}\""),
        format!("export {ENV_GLOVE}=\"{glove}\""),
        // $PYTHONPATH is left unexpanded for the remote shell.
        format!("PYTHONPATH=$PYTHONPATH:{REMOTE_ROOT} python {command}"),
    ]
    .join(" && ")
}

/// Full argument vector for the submission binary, ending with the remote
/// command as the positional payload.
pub fn build_submit_args(plan: &SubmitPlan<'_>) -> Vec<String> {
    let mut argv: Vec<String> = plan
        .mode
        .subcommand_args()
        .iter()
        .map(|s| s.to_string())
        .collect();
    argv.push("--machine-type".to_string());
    argv.push(plan.machine_type.to_string());
    for mount in &plan.mounts {
        argv.push("--mount".to_string());
        argv.push(resolve_tokens(mount));
    }
    for pkg in APT_PACKAGES {
        argv.push("--apt".to_string());
        argv.push(pkg.to_string());
    }
    argv.push("--conda-file".to_string());
    argv.push(plan.conda_file.to_string());
    if plan.mode == SubmitMode::HyperRandom {
        argv.extend(plan.sweep_params.split_whitespace().map(str::to_string));
    }
    argv.extend(plan.extra_opts.split_whitespace().map(str::to_string));
    argv.push(build_remote_command(plan));
    argv
}

/// Minimal POSIX quoting: pass bare words through, single-quote the rest.
pub fn quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_bare_char) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', "'\\''"))
}

fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '=' | '@' | '%' | '+' | ',')
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn bare_words_pass_through() {
        assert_eq!(quote("-m"), "-m");
        assert_eq!(quote("riemann.train"), "riemann.train");
        assert_eq!(quote("lr=0.01"), "lr=0.01");
    }

    #[test]
    fn whitespace_and_quotes_are_wrapped() {
        assert_eq!(quote("a b"), "'a b'");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("it's"), "'it'\\''s'");
    }
}
