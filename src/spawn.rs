//! Process execution with output capture
//!
//! [`ProcessRunner::run`] launches a child process and collects its standard
//! output. Anything written to standard error fails the whole run with the
//! first chunk received. Completion waits for the process to exit and for
//! both pipes to be drained.

use crate::error::GabbsError;
use crate::logger::Logger;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

const READ_CHUNK: usize = 8 * 1024;

/// Options applied to a spawned process
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl SpawnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Short description of a conventional shell exit code
fn describe_exit_code(code: i32) -> &'static str {
    match code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "not executable",
        127 => "command not found",
        129..=255 => "terminated by signal",
        _ => "error",
    }
}

pub struct ProcessRunner {
    logger: Arc<dyn Logger>,
}

impl ProcessRunner {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Run `command` with `parameters` and return everything it wrote to stdout
    ///
    /// # Errors
    /// - [`GabbsError::Spawn`] if the process cannot be started
    /// - [`GabbsError::Process`] as soon as the process writes to stderr
    pub async fn run(
        &self,
        command: &str,
        parameters: &[String],
        options: &SpawnOptions,
    ) -> Result<String, GabbsError> {
        let mut cmd = Command::new(command);
        cmd.args(parameters)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }
        cmd.envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        self.logger
            .debug(&format!("Running '{} {}'", command, parameters.join(" ")));

        let mut child = cmd.spawn().map_err(|source| GabbsError::Spawn {
            command: command.to_string(),
            source,
        })?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("stderr was not captured"))?;

        let mut output = Vec::new();
        let mut out_buf = [0u8; READ_CHUNK];
        let mut err_buf = [0u8; READ_CHUNK];
        let mut stdout_open = true;
        let mut stderr_open = true;
        let mut status = None;

        while stdout_open || stderr_open || status.is_none() {
            tokio::select! {
                biased;

                read = stderr.read(&mut err_buf), if stderr_open => match read? {
                    0 => stderr_open = false,
                    n => {
                        return Err(GabbsError::Process {
                            command: command.to_string(),
                            stderr: String::from_utf8_lossy(&err_buf[..n]).into_owned(),
                        });
                    }
                },
                read = stdout.read(&mut out_buf), if stdout_open => match read? {
                    0 => stdout_open = false,
                    n => output.extend_from_slice(&out_buf[..n]),
                },
                exit = child.wait(), if status.is_none() => {
                    status = Some(exit?);
                }
            }
        }

        if let Some(code) = status.and_then(|s| s.code())
            && code != 0
        {
            self.logger.debug(&format!(
                "'{}' ended with exit code {} ({})",
                command,
                code,
                describe_exit_code(code)
            ));
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{MemoryLogger, NullLogger};

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    fn runner() -> ProcessRunner {
        ProcessRunner::new(Arc::new(NullLogger))
    }

    #[tokio::test]
    async fn test_run_collects_stdout_in_order() {
        let output = runner()
            .run("sh", &sh("printf 'one '; printf 'two '; printf 'three'"), &SpawnOptions::new())
            .await
            .unwrap();
        assert_eq!(output, "one two three");
    }

    #[tokio::test]
    async fn test_run_with_no_output_resolves_empty() {
        let output = runner()
            .run("sh", &sh("true"), &SpawnOptions::new())
            .await
            .unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_run_rejects_on_stderr() {
        let err = runner()
            .run("sh", &sh("printf 'partial'; printf 'boom' >&2"), &SpawnOptions::new())
            .await
            .unwrap_err();

        match err {
            GabbsError::Process { command, stderr } => {
                assert_eq!(command, "sh");
                assert!(stderr.starts_with("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_without_stderr_still_resolves() {
        let logger = Arc::new(MemoryLogger::new());
        let runner = ProcessRunner::new(logger.clone());

        let output = runner
            .run("sh", &sh("printf 'done'; exit 3"), &SpawnOptions::new())
            .await
            .unwrap();

        assert_eq!(output, "done");
        assert!(
            logger
                .messages("debug")
                .iter()
                .any(|m| m.contains("exit code 3"))
        );
    }

    #[tokio::test]
    async fn test_run_missing_executable_is_spawn_error() {
        let err = runner()
            .run("definitely-not-a-real-binary-12345", &[], &SpawnOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, GabbsError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_run_honours_cwd_and_env() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let options = SpawnOptions::new()
            .with_cwd(temp_dir.path())
            .with_env("GABBS_SPAWN_TEST", "hello");

        let output = runner()
            .run("sh", &sh("printf \"$GABBS_SPAWN_TEST \"; pwd"), &options)
            .await
            .unwrap();

        let expected_dir = temp_dir.path().canonicalize().unwrap();
        assert!(output.starts_with("hello "));
        assert!(output.trim_end().ends_with(expected_dir.file_name().unwrap().to_str().unwrap()));
    }

    #[test]
    fn test_describe_exit_code() {
        assert_eq!(describe_exit_code(0), "success");
        assert_eq!(describe_exit_code(127), "command not found");
        assert_eq!(describe_exit_code(137), "terminated by signal");
        assert_eq!(describe_exit_code(42), "error");
    }

    #[tokio::test]
    async fn test_run_large_output() {
        let output = runner()
            .run(
                "sh",
                &sh("for i in $(seq 1 2000); do echo \"Line $i\"; done"),
                &SpawnOptions::new(),
            )
            .await
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2000);
        assert_eq!(lines[0], "Line 1");
        assert_eq!(lines[1999], "Line 2000");
    }
}
