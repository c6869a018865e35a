//! Dispatcher sequencing tests

mod support;

use gabbs::dispatcher::CommandRegistry;
use gabbs::logger::{MemoryLogger, NullLogger};
use gabbs::{Command, Dispatcher, GabbsError, HomeConfigLookup};
use std::sync::{Arc, Mutex};
use support::{RecordingCommand, RunLog, found};

fn recorder(
    name: &'static str,
    home: fn() -> HomeConfigLookup,
    log: &RunLog,
    fail: bool,
) -> impl Fn(Vec<String>) -> gabbs::Result<Box<dyn Command>> + Send + Sync + 'static {
    let log = log.clone();
    move |_args| {
        let command: Box<dyn Command> = Box::new(RecordingCommand {
            name: name.to_string(),
            home_config: home(),
            log: log.clone(),
            fail,
        });
        Ok(command)
    }
}

fn broken(_args: Vec<String>) -> gabbs::Result<Box<dyn Command>> {
    Err(GabbsError::InvalidArgument("usage: gabbs broken <path>".to_string()).into())
}

fn absent() -> HomeConfigLookup {
    HomeConfigLookup::Absent
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_default_runs_before_target() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", found, &log, false))
        .register("lint", recorder("lint", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    dispatcher.start(args(&["lint", "./src"])).await.unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["setup", "lint"]);
}

#[tokio::test]
async fn test_default_is_skipped_without_home_config() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", absent, &log, false))
        .register("lint", recorder("lint", absent, &log, false));

    let logger = Arc::new(MemoryLogger::new());
    let dispatcher = Dispatcher::new(registry, logger.clone());
    dispatcher.start(args(&["lint", "./src"])).await.unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["lint"]);
    assert!(
        logger
            .messages("debug")
            .contains(&"No home configuration found, skipping 'setup'".to_string())
    );
}

#[tokio::test]
async fn test_default_command_runs_once_when_named() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", found, &log, false))
        .register("lint", recorder("lint", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    dispatcher.start(args(&["setup"])).await.unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["setup"]);
}

#[tokio::test]
async fn test_failing_default_stops_target() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", found, &log, true))
        .register("lint", recorder("lint", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    let err = dispatcher.start(args(&["lint"])).await.unwrap_err();

    assert_eq!(err.to_string(), "setup failed");
    assert_eq!(*log.lock().unwrap(), vec!["setup"]);
}

#[tokio::test]
async fn test_registry_without_default_runs_target_only() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry.register("lint", recorder("lint", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    dispatcher.start(args(&["--lint"])).await.unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["lint"]);
}

#[tokio::test]
async fn test_unknown_command_runs_nothing() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry.register_default("setup", recorder("setup", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    let err = dispatcher.start(args(&["deploy"])).await.unwrap_err();

    match err.downcast_ref::<GabbsError>() {
        Some(GabbsError::UnknownCommand(name)) => assert_eq!(name, "deploy"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_args_are_rejected() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry.register_default("setup", recorder("setup", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    let err = dispatcher.start(Vec::new()).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GabbsError>(),
        Some(GabbsError::MissingSubcommand)
    ));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sequence_is_logged_at_debug_level() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", found, &log, false))
        .register("show", recorder("show", found, &log, false));

    let logger = Arc::new(MemoryLogger::new());
    let dispatcher = Dispatcher::new(registry, logger.clone());
    dispatcher.start(args(&["show"])).await.unwrap();

    assert_eq!(
        logger.messages("debug"),
        vec![
            "Running 'setup' before 'show'".to_string(),
            "Running 'show'".to_string()
        ]
    );
}

#[tokio::test]
async fn test_failing_target_factory_runs_nothing() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", recorder("setup", found, &log, false))
        .register("broken", broken);

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    let err = dispatcher.start(args(&["broken"])).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GabbsError>(),
        Some(GabbsError::InvalidArgument(_))
    ));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failing_default_factory_stops_target() {
    let log: RunLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = CommandRegistry::new();
    registry
        .register_default("setup", broken)
        .register("lint", recorder("lint", found, &log, false));

    let dispatcher = Dispatcher::new(registry, Arc::new(NullLogger));
    let err = dispatcher.start(args(&["lint", "./src"])).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid arguments: usage: gabbs broken <path>");
    assert!(log.lock().unwrap().is_empty());
}
