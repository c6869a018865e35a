//! Common test support utilities and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use gabbs::{Command, HomeConfig, HomeConfigLookup, Result};
use std::path::Path;
use std::process::Command as Process;
use std::sync::{Arc, Mutex};

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the `gabbs` binary with `args`, reading the home config from `home_config`
pub fn run_cli(args: &[&str], home_config: &Path) -> CliOutput {
    let output = Process::new(env!("CARGO_BIN_EXE_gabbs"))
        .args(args)
        .env("GABBS_HOME_CONFIG", home_config)
        .env_remove("GABBS_DEBUG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute gabbs");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Shared, ordered record of which commands ran
pub type RunLog = Arc<Mutex<Vec<String>>>;

/// Command double that appends its name to a [`RunLog`] when run
pub struct RecordingCommand {
    pub name: String,
    pub home_config: HomeConfigLookup,
    pub log: RunLog,
    pub fail: bool,
}

#[async_trait]
impl Command for RecordingCommand {
    async fn run(&self) -> Result<()> {
        self.log.lock().unwrap().push(self.name.clone());
        if self.fail {
            anyhow::bail!("{} failed", self.name);
        }
        Ok(())
    }

    fn home_config(&self) -> &HomeConfigLookup {
        &self.home_config
    }
}

pub fn found() -> HomeConfigLookup {
    HomeConfigLookup::Found(HomeConfig::new().with_value("github_username", "octocat"))
}
