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
    about = "Submit a hyperparameter sweep to the remote executor",
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
        eprintln!("spell_hyper_search: {err}");
        std::process::exit(1);
    }
    if preflight::require_command(&target.command).is_err() {
        eprintln!("usage: SPELL_HYPER_PARAMS=\"--param lr=0.001:0.1\" spell_hyper_search <python args...>");
        std::process::exit(1);
    }
    if let Err(err) = preflight::require_sweep_params(cfg.sweep_params.as_deref()) {
        eprintln!("spell_hyper_search: {err}");
        eprintln!("usage: SPELL_HYPER_PARAMS=\"--param lr=0.001:0.1\" spell_hyper_search <python args...>");
        std::process::exit(1);
    }

    services::refresh_environment_descriptor(&cfg)?;

    let plan = cfg.plan(SubmitMode::HyperRandom, target.command);
    let argv = build_submit_args(&plan);
    if cfg.debug {
        eprintln!(
            "spell_hyper_search: resolved command: {}",
            quoted_command(&plan)
        );
        eprintln!(
            "spell_hyper_search: submitting: {} {}",
            cfg.spell_bin.display(),
            argv.iter().map(|a| quote(a)).collect::<Vec<_>>().join(" ")
        );
    }

    let status = services::submit(&cfg, &argv)?;
    std::process::exit(status.code().unwrap_or(1));
}
