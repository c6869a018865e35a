//! Base types and traits for the command pattern

use crate::config::HomeConfigLookup;
use crate::constants;
use crate::error::GabbsError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Trait that all subcommands must implement
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn run(&self) -> Result<()>;

    /// Home configuration captured when the command was created
    fn home_config(&self) -> &HomeConfigLookup;
}

/// State shared by every subcommand, captured once at construction
#[derive(Debug, Clone)]
pub struct CommandBase {
    args: Vec<String>,
    extra_params: Vec<String>,
    destination: PathBuf,
    home_config: HomeConfigLookup,
    install_root: PathBuf,
}

impl CommandBase {
    /// Capture `args` and look up the home configuration
    ///
    /// # Errors
    /// Returns [`GabbsError::MissingSubcommand`] when `args` is empty.
    pub fn new(args: Vec<String>, extra_params: Option<Vec<String>>) -> Result<Self, GabbsError> {
        Self::with_home_config(args, extra_params, HomeConfigLookup::load())
    }

    /// Same as [`CommandBase::new`] with an already resolved home configuration
    pub fn with_home_config(
        args: Vec<String>,
        extra_params: Option<Vec<String>>,
        home_config: HomeConfigLookup,
    ) -> Result<Self, GabbsError> {
        let destination = args
            .last()
            .map(PathBuf::from)
            .ok_or(GabbsError::MissingSubcommand)?;

        Ok(Self {
            args,
            extra_params: extra_params.unwrap_or_default(),
            destination,
            home_config,
            install_root: install_root(),
        })
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn extra_params(&self) -> &[String] {
        &self.extra_params
    }

    /// The trailing argument, taken as the destination path
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn home_config(&self) -> &HomeConfigLookup {
        &self.home_config
    }

    /// Resolve `pathname` against the installation root of the running binary
    pub fn absolute_path(&self, pathname: &str) -> PathBuf {
        self.install_root.join(pathname.trim_start_matches('/'))
    }

    /// Resolve `path` against the destination path
    pub fn destination_path(&self, path: &str) -> PathBuf {
        self.destination.join(path.trim_start_matches('/'))
    }

    /// Lint ruleset to use, honouring the `--es6` flag in second position
    pub fn lint_rules_path(&self) -> PathBuf {
        let rules = if self.args.len() > 2 && self.args[1] == constants::flags::ES6 {
            constants::paths::LINT_RULES_ES6
        } else {
            constants::paths::LINT_RULES
        };
        self.absolute_path(rules)
    }
}

/// Parent of the directory holding the running executable
///
/// Installed layouts put the binary under `<root>/bin`, with bundled
/// resources such as lint rulesets next to it under `<root>/config`.
fn install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent()?.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
