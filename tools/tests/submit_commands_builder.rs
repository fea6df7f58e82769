use riemann_tools::submit_commands::{
    builder::{build_remote_command, build_submit_args},
    common::SubmitPlan,
};

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn run_defaults_build_expected_remote_command() {
    let plan = SubmitPlan::run(args(&["-m", "pkg.module", "arg1"]));
    let expected = "cd /spell/riemannian-nlp && make env && \
         python scripts/dump_args.py -m pkg.module arg1 && \
         export EMBEDDING_EVALUATION_DATA_PATH=\"/spell/riemannian-nlp/data/evaluation\" && \
         export GLOVE_PATH=\"/spell/riemannian-nlp/resources/glove.840B.300d.zip\" && \
         PYTHONPATH=$PYTHONPATH:/spell/riemannian-nlp python -m pkg.module arg1";
    assert_eq!(build_remote_command(&plan), expected);
}

#[test]
fn run_defaults_build_expected_argv() {
    let plan = SubmitPlan::run(args(&["-m", "pkg.module", "arg1"]));
    let argv = build_submit_args(&plan);
    let expected_flags = [
        "run",
        "--machine-type",
        "K80",
        "--mount",
        "uploads/riemannian-nlp/data:/spell/riemannian-nlp/data",
        "--mount",
        "uploads/riemannian-nlp/resources:/spell/riemannian-nlp/resources",
        "--apt",
        "gcc",
        "--apt",
        "unzip",
        "--conda-file",
        "environment.yml",
    ];
    assert_eq!(&argv[..expected_flags.len()], &args(&expected_flags)[..]);
    assert_eq!(argv.len(), expected_flags.len() + 1);
    assert_eq!(argv.last().unwrap(), &build_remote_command(&plan));
}

#[test]
fn state_dir_token_rewrites_in_forwarded_command() {
    let plan = SubmitPlan::run(args(&["-m", "pkg.module", "--state-dir", "__STATE_DIR__"]));
    let remote = build_remote_command(&plan);
    assert!(remote.contains("python -m pkg.module --state-dir /spell/riemannian-nlp/state"));
    assert!(!remote.contains("__STATE_DIR__"));
    assert!(!remote.contains("__ROOT__"));
}

#[test]
fn env_overrides_pass_through_with_substitution() {
    let plan = SubmitPlan::run(args(&["run.py"]))
        .with_eval_data_path("__ROOT__/data/custom")
        .with_glove_path("/data/glove.zip");
    let remote = build_remote_command(&plan);
    assert!(remote
        .contains("export EMBEDDING_EVALUATION_DATA_PATH=\"/spell/riemannian-nlp/data/custom\""));
    assert!(remote.contains("export GLOVE_PATH=\"/data/glove.zip\""));
}

#[test]
fn mounts_resolve_root_marker() {
    let plan = SubmitPlan::run(args(&["run.py"]))
        .with_mounts(vec!["uploads/x:__ROOT__/x", "uploads/y:/fixed/y"]);
    let argv = build_submit_args(&plan);
    let mounts: Vec<&String> = argv
        .iter()
        .zip(argv.iter().skip(1))
        .filter(|(flag, _)| *flag == "--mount")
        .map(|(_, value)| value)
        .collect();
    assert_eq!(
        mounts,
        ["uploads/x:/spell/riemannian-nlp/x", "uploads/y:/fixed/y"]
    );
}

#[test]
fn hyper_inserts_sweep_params_before_extra_opts() {
    let plan = SubmitPlan::hyper(
        args(&["-m", "pkg.module"]),
        "--param lr=0.001:0.1 --num-runs 20".to_string(),
    )
    .with_extra_opts("--force");
    let argv = build_submit_args(&plan);
    assert_eq!(&argv[..2], &args(&["hyper", "random"])[..]);
    let conda = argv.iter().position(|a| a == "--conda-file").unwrap();
    assert_eq!(
        &argv[conda + 2..argv.len() - 1],
        &args(&["--param", "lr=0.001:0.1", "--num-runs", "20", "--force"])[..]
    );
}

#[test]
fn arguments_needing_quotes_are_single_quoted() {
    let plan = SubmitPlan::run(args(&["run.py", "-u", "note=two words"]));
    let remote = build_remote_command(&plan);
    assert!(remote.contains("python run.py -u 'note=two words'"));
}
