use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::submit_commands::common::{
    SubmitMode, SubmitPlan, DEFAULT_CONDA_FILE, DEFAULT_EVAL_DATA_PATH, DEFAULT_GLOVE_PATH,
    DEFAULT_MACHINE_TYPE, DEFAULT_MOUNTS, ENV_EVAL_DATA, ENV_GLOVE,
};

const DEFAULT_CONFIG_NAME: &str = "riemann-tools.toml";

pub const ENV_CONFIG_PATH: &str = "RIEMANN_TOOLS_CONFIG";
pub const ENV_MACHINE_TYPE: &str = "SPELL_MACHINE_TYPE";
pub const ENV_MOUNTS: &str = "SPELL_MOUNTS";
pub const ENV_EXTRA_OPTS: &str = "SPELL_EXTRA_OPTS";
pub const ENV_DEBUG: &str = "SPELL_RUN_DEBUG";
pub const ENV_SWEEP_PARAMS: &str = "SPELL_HYPER_PARAMS";

/// Submission configuration, resolved once at startup: built-in defaults,
/// overlaid by an optional TOML file, overlaid by the process environment.
/// A variable present and non-empty always wins.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub spell_bin: PathBuf,
    pub make_bin: PathBuf,
    pub machine_type: String,
    pub mounts: Vec<String>,
    pub extra_opts: String,
    pub conda_file: String,
    pub debug: bool,
    pub sweep_params: Option<String>,
    pub eval_data_path: String,
    pub glove_path: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            spell_bin: PathBuf::from("spell"),
            make_bin: PathBuf::from("make"),
            machine_type: DEFAULT_MACHINE_TYPE.to_string(),
            mounts: DEFAULT_MOUNTS.iter().map(|m| m.to_string()).collect(),
            extra_opts: String::new(),
            conda_file: DEFAULT_CONDA_FILE.to_string(),
            debug: false,
            sweep_params: None,
            eval_data_path: DEFAULT_EVAL_DATA_PATH.to_string(),
            glove_path: DEFAULT_GLOVE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct SubmitConfigFile {
    spell_bin: Option<String>,
    make_bin: Option<String>,
    machine_type: Option<String>,
    mounts: Option<Vec<String>>,
    extra_opts: Option<String>,
    conda_file: Option<String>,
}

impl SubmitConfig {
    pub fn load() -> Self {
        let base = if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            Self::from_path(Path::new(&path)).unwrap_or_default()
        } else {
            Self::from_path(Path::new(DEFAULT_CONFIG_NAME)).unwrap_or_default()
        };
        let cfg = base.with_env(|key| std::env::var(key).ok());
        cfg.warn_if_invalid();
        cfg
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let raw = std::fs::read_to_string(path).ok()?;
        let file: SubmitConfigFile = toml::from_str(&raw).ok()?;
        Some(Self::from_file(file))
    }

    fn from_file(file: SubmitConfigFile) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = file.spell_bin {
            cfg.spell_bin = PathBuf::from(v);
        }
        if let Some(v) = file.make_bin {
            cfg.make_bin = PathBuf::from(v);
        }
        if let Some(v) = file.machine_type {
            cfg.machine_type = v;
        }
        if let Some(v) = file.mounts {
            cfg.mounts = v;
        }
        if let Some(v) = file.extra_opts {
            cfg.extra_opts = v;
        }
        if let Some(v) = file.conda_file {
            cfg.conda_file = v;
        }
        cfg
    }

    /// Overlay from an environment lookup. Empty values do not override.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = get(ENV_MACHINE_TYPE) {
            self.machine_type = v;
        }
        if let Some(v) = get(ENV_MOUNTS) {
            self.mounts = v.split_whitespace().map(str::to_string).collect();
        }
        if let Some(v) = get(ENV_EXTRA_OPTS) {
            self.extra_opts = v;
        }
        self.debug = get(ENV_DEBUG).is_some();
        self.sweep_params = get(ENV_SWEEP_PARAMS);
        if let Some(v) = get(ENV_EVAL_DATA) {
            self.eval_data_path = v;
        }
        if let Some(v) = get(ENV_GLOVE) {
            self.glove_path = v;
        }
        self
    }

    /// Per-invocation plan for the given mode and target command.
    pub fn plan(&self, mode: SubmitMode, command: Vec<String>) -> SubmitPlan<'static> {
        let mut plan = match mode {
            SubmitMode::Run => SubmitPlan::run(command),
            SubmitMode::HyperRandom => {
                SubmitPlan::hyper(command, self.sweep_params.clone().unwrap_or_default())
            }
        };
        plan = plan
            .with_machine_type(self.machine_type.clone())
            .with_mounts(self.mounts.clone())
            .with_conda_file(self.conda_file.clone())
            .with_extra_opts(self.extra_opts.clone())
            .with_eval_data_path(self.eval_data_path.clone())
            .with_glove_path(self.glove_path.clone());
        plan
    }

    fn warn_if_invalid(&self) {
        if self.spell_bin.as_os_str().is_empty() {
            eprintln!("tools config: spell_bin is empty; submission will fail to launch");
        }
        if self.conda_file.trim().is_empty() {
            eprintln!("tools config: conda_file is empty; the submission binary will reject it");
        }
        if self.mounts.is_empty() {
            eprintln!("tools config: no mounts configured; remote data paths will be missing");
        }
    }
}
