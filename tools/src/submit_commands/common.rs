use std::{borrow::Cow, fmt};

/// Environment variables forwarded into the remote command.
pub const ENV_EVAL_DATA: &str = "EMBEDDING_EVALUATION_DATA_PATH";
pub const ENV_GLOVE: &str = "GLOVE_PATH";

pub const DEFAULT_MACHINE_TYPE: &str = "K80";
pub const DEFAULT_CONDA_FILE: &str = "environment.yml";
pub const DEFAULT_EVAL_DATA_PATH: &str = "__ROOT__/data/evaluation";
pub const DEFAULT_GLOVE_PATH: &str = "__ROOT__/resources/glove.840B.300d.zip";
pub const DEFAULT_MOUNTS: [&str; 2] = [
    "uploads/riemannian-nlp/data:__ROOT__/data",
    "uploads/riemannian-nlp/resources:__ROOT__/resources",
];

/// System packages installed on the execution host before the run.
pub const APT_PACKAGES: [&str; 2] = ["gcc", "unzip"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Run,
    HyperRandom,
}

impl SubmitMode {
    /// Subcommand words passed to the submission binary.
    pub fn subcommand_args(self) -> &'static [&'static str] {
        match self {
            SubmitMode::Run => &["run"],
            SubmitMode::HyperRandom => &["hyper", "random"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubmitMode::Run => "run",
            SubmitMode::HyperRandom => "hyper random",
        }
    }
}

impl fmt::Display for SubmitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission, fully described. Placeholder markers stay unresolved here;
/// assembly resolves them.
#[derive(Clone, Debug)]
pub struct SubmitPlan<'a> {
    pub mode: SubmitMode,
    pub machine_type: Cow<'a, str>,
    pub mounts: Vec<Cow<'a, str>>,
    pub conda_file: Cow<'a, str>,
    /// Additional submission options, whitespace-split at assembly.
    pub extra_opts: Cow<'a, str>,
    /// Sweep parameter words, whitespace-split at assembly. Empty for `Run`.
    pub sweep_params: Cow<'a, str>,
    pub eval_data_path: Cow<'a, str>,
    pub glove_path: Cow<'a, str>,
    /// Target interpreter invocation as supplied by the caller.
    pub command: Vec<String>,
}

impl SubmitPlan<'_> {
    pub fn run(command: Vec<String>) -> SubmitPlan<'static> {
        SubmitPlan {
            mode: SubmitMode::Run,
            machine_type: Cow::Borrowed(DEFAULT_MACHINE_TYPE),
            mounts: DEFAULT_MOUNTS.iter().map(|m| Cow::Borrowed(*m)).collect(),
            conda_file: Cow::Borrowed(DEFAULT_CONDA_FILE),
            extra_opts: Cow::Borrowed(""),
            sweep_params: Cow::Borrowed(""),
            eval_data_path: Cow::Borrowed(DEFAULT_EVAL_DATA_PATH),
            glove_path: Cow::Borrowed(DEFAULT_GLOVE_PATH),
            command,
        }
    }

    pub fn hyper(command: Vec<String>, sweep_params: String) -> SubmitPlan<'static> {
        let mut plan = SubmitPlan::run(command);
        plan.mode = SubmitMode::HyperRandom;
        plan.sweep_params = Cow::Owned(sweep_params);
        plan
    }
}

impl<'a> SubmitPlan<'a> {
    pub fn with_machine_type<T: Into<Cow<'a, str>>>(mut self, machine_type: T) -> Self {
        self.machine_type = machine_type.into();
        self
    }

    pub fn with_mounts<T: Into<Cow<'a, str>>>(mut self, mounts: Vec<T>) -> Self {
        self.mounts = mounts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_conda_file<T: Into<Cow<'a, str>>>(mut self, conda_file: T) -> Self {
        self.conda_file = conda_file.into();
        self
    }

    pub fn with_extra_opts<T: Into<Cow<'a, str>>>(mut self, extra_opts: T) -> Self {
        self.extra_opts = extra_opts.into();
        self
    }

    pub fn with_eval_data_path<T: Into<Cow<'a, str>>>(mut self, path: T) -> Self {
        self.eval_data_path = path.into();
        self
    }

    pub fn with_glove_path<T: Into<Cow<'a, str>>>(mut self, path: T) -> Self {
        self.glove_path = path.into();
        self
    }
}
