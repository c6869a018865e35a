//! Logging interface shared by every component
//!
//! Components never print directly; they receive an `Arc<dyn Logger>` at
//! construction. [`ConsoleLogger`] is the implementation used by the binary.

use colored::*;
use std::sync::Arc;

/// Sink for user facing output
pub trait Logger: Send + Sync {
    /// Formatted informational message
    fn log(&self, message: &str);

    /// Message printed exactly as given
    fn raw(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, message: &str);
}

/// Logger writing colored output to the terminal
#[derive(Default)]
pub struct ConsoleLogger {
    verbose: bool,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Build a logger whose verbosity follows the `GABBS_DEBUG` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(crate::constants::env::DEBUG).is_some())
    }

    pub fn shared(self) -> Arc<dyn Logger> {
        Arc::new(self)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}: {}", "info".green(), message);
    }

    fn raw(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{}: {}", "debug".dimmed(), message.dimmed());
        }
    }
}

/// Logger that discards everything
#[derive(Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}
    fn raw(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Logger that keeps every message in memory, tagged with its level
///
/// Test double for code that takes an `Arc<dyn Logger>`.
#[doc(hidden)]
#[derive(Default)]
pub struct MemoryLogger {
    entries: std::sync::Mutex<Vec<(&'static str, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at the given level, in order
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: &'static str, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.push("info", message);
    }

    fn raw(&self, message: &str) {
        self.push("raw", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn debug(&self, message: &str) {
        self.push("debug", message);
    }
}
