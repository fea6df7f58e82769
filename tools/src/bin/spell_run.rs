use clap::Parser;
use cli_support::common::{TargetCommandArgs, TargetCommandOpts};
use riemann_tools::preflight;
use riemann_tools::services;
use riemann_tools::submit_commands::builder::{build_submit_args, quote, quoted_command};
use riemann_tools::submit_commands::common::SubmitMode;
use riemann_tools::SubmitConfig;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Submit a single training run to the remote executor",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    target: TargetCommandArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let target = TargetCommandOpts::from(&args.target);
    let cfg = SubmitConfig::load();

    if let Err(err) = preflight::check_bash_version() {
        eprintln!("spell_run: {err}");
        std::process::exit(1);
    }
    if preflight::require_command(&target.command).is_err() {
        eprintln!("usage: spell_run <python args...>");
        eprintln!("  e.g. spell_run -m riemann.train -u learning_rate=0.01");
        std::process::exit(1);
    }

    services::refresh_environment_descriptor(&cfg)?;

    let plan = cfg.plan(SubmitMode::Run, target.command);
    let argv = build_submit_args(&plan);
    if cfg.debug {
        eprintln!("spell_run: resolved command: {}", quoted_command(&plan));
        eprintln!(
            "spell_run: submitting: {} {}",
            cfg.spell_bin.display(),
            argv.iter().map(|a| quote(a)).collect::<Vec<_>>().join(" ")
        );
    }

    let status = services::submit(&cfg, &argv)?;
    std::process::exit(status.code().unwrap_or(1));
}
