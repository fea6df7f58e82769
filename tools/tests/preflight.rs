use riemann_tools::preflight::{
    parse_bash_major, require_command, require_sweep_params, PreflightError,
};

#[test]
fn bash_versions_parse_numerically() {
    assert_eq!(
        parse_bash_major("GNU bash, version 5.2.15(1)-release (aarch64-unknown-linux-gnu)"),
        Some(5)
    );
    assert_eq!(
        parse_bash_major("GNU bash, version 3.2.57(1)-release (x86_64-apple-darwin21)"),
        Some(3)
    );
    // Double-digit majors must not be compared lexically.
    assert_eq!(parse_bash_major("GNU bash, version 10.0.0(1)-release"), Some(10));
}

#[test]
fn unparseable_version_output_is_rejected() {
    assert_eq!(parse_bash_major("zsh 5.9 (x86_64-apple-darwin22.0)"), None);
    assert_eq!(parse_bash_major(""), None);
}

#[test]
fn empty_target_command_is_a_usage_error() {
    assert!(matches!(
        require_command(&[]),
        Err(PreflightError::EmptyCommand)
    ));
    assert!(require_command(&["-m".to_string(), "pkg".to_string()]).is_ok());
}

#[test]
fn sweep_params_must_be_present_and_non_empty() {
    assert!(matches!(
        require_sweep_params(None),
        Err(PreflightError::MissingSweepParams)
    ));
    assert!(matches!(
        require_sweep_params(Some("   ")),
        Err(PreflightError::MissingSweepParams)
    ));
    assert!(require_sweep_params(Some("--param lr=0.001:0.1")).is_ok());
}
