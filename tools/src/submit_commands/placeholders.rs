use std::borrow::Cow;

/// Absolute path on the execution host where the project code is deployed.
pub const REMOTE_ROOT: &str = "/spell/riemannian-nlp";

/// Path roles recognized in forwarded arguments, mount specs, and forwarded
/// environment values.
///
/// Substitution is textual and global: every occurrence of a marker is
/// rewritten, anywhere in the string. There is no escaping mechanism, so a
/// literal occurrence of a marker in unrelated caller data is rewritten too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathToken {
    /// Mutable run state under the remote root.
    StateDir,
    /// Remote working root.
    Root,
}

impl PathToken {
    pub const fn marker(self) -> &'static str {
        match self {
            PathToken::StateDir => "__STATE_DIR__",
            PathToken::Root => "__ROOT__",
        }
    }

    fn expansion(self) -> Cow<'static, str> {
        match self {
            // Written in terms of the root marker; the second resolution pass
            // expands it.
            PathToken::StateDir => Cow::Owned(format!("{}/state", PathToken::Root.marker())),
            PathToken::Root => Cow::Borrowed(REMOTE_ROOT),
        }
    }
}

/// Resolution order is load-bearing: `StateDir` must expand before `Root`.
const RESOLVE_ORDER: [PathToken; 2] = [PathToken::StateDir, PathToken::Root];

/// Replace every marker occurrence in `input`. Marker-free input passes
/// through unchanged.
pub fn resolve_tokens(input: &str) -> String {
    let mut out = input.to_string();
    for token in RESOLVE_ORDER {
        if out.contains(token.marker()) {
            out = out.replace(token.marker(), &token.expansion());
        }
    }
    out
}

pub fn resolve_args(args: &[String]) -> Vec<String> {
    args.iter().map(|arg| resolve_tokens(arg)).collect()
}
