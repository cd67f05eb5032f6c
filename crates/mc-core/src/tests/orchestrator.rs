use crate::tests::{FakeConsole, FakeLog, StopReply};
use crate::{
    ActuationError, LogTailWatcher, RestartMethod, RestartOrchestrator, RestartPhase,
    RestartRequest, ServerActuator, SupervisorCommand,
};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::{eq, ge, lt};
use tokio::sync::watch;

fn orchestrator(console: &FakeConsole, supervisor: &str, log: &FakeLog) -> RestartOrchestrator {
    let backend = ServerActuator::new(
        Arc::new(console.clone()),
        SupervisorCommand::new(supervisor, "minecraft"),
    );
    RestartOrchestrator::new(
        Arc::new(backend),
        LogTailWatcher::new(Arc::new(log.clone())),
    )
}

#[tokio::test(start_paused = true)]
async fn given_remote_restart_when_ready_line_seen_then_detected_phase_published() {
    // Given
    let console = FakeConsole::new(StopReply::Ack);
    let log = FakeLog::emitting(&[(3_000, "Done (2.9s)!")]);
    let request = RestartRequest::new(RestartMethod::RemoteConsole, 2, 20, None).unwrap();
    let (phase_tx, phase_rx) = watch::channel(RestartPhase::Idle);

    // When
    let result = orchestrator(&console, "true", &log)
        .execute_observed(&request, &phase_tx)
        .await
        .unwrap();

    // Then
    assert!(result.detected);
    assert_that!(result.elapsed_secs, ge(3.0));
    assert_that!(result.elapsed_secs, lt(3.5));
    assert!(matches!(
        *phase_rx.borrow(),
        RestartPhase::Detected { .. }
    ));
    assert!(phase_rx.borrow().is_terminal());
}

#[tokio::test]
async fn given_local_restart_fails_when_executing_then_no_watch_started() {
    // Given
    let console = FakeConsole::new(StopReply::Ack);
    let log = FakeLog::emitting(&[(0, "Done (1s)!")]);
    let request = RestartRequest::new(RestartMethod::LocalSupervisor, 5, 30, None).unwrap();
    let (phase_tx, phase_rx) = watch::channel(RestartPhase::Idle);

    // When
    let result = orchestrator(&console, "false", &log)
        .execute_observed(&request, &phase_tx)
        .await;

    // Then
    assert!(matches!(
        result,
        Err(ActuationError::SupervisorFailed { .. })
    ));
    assert_that!(log.follows(), eq(0));
    assert!(matches!(
        *phase_rx.borrow(),
        RestartPhase::ActuationFailed { .. }
    ));
}

#[tokio::test]
async fn given_local_method_when_executing_then_console_never_used() {
    // Given
    let console = FakeConsole::new(StopReply::Ack);
    let log = FakeLog::emitting(&[(50, "Done (0.1s)!")]);
    let request = RestartRequest::new(RestartMethod::LocalSupervisor, 5, 5, None).unwrap();

    // When
    let result = orchestrator(&console, "true", &log)
        .execute(&request)
        .await
        .unwrap();

    // Then
    assert!(result.detected);
    assert_that!(console.sent().len(), eq(0));
    assert_that!(log.follows(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_remote_method_when_executing_then_supervisor_never_used() {
    // Given - a supervisor that would fail if it were called
    let console = FakeConsole::new(StopReply::Ack);
    let log = FakeLog::emitting(&[(10, "Done (0.1s)!")]);
    let request = RestartRequest::new(RestartMethod::RemoteConsole, 0, 5, None).unwrap();

    // When
    let result = orchestrator(&console, "false", &log).execute(&request).await;

    // Then
    assert!(result.is_ok());
    assert_that!(console.count("stop"), eq(1));
}

#[tokio::test(start_paused = true)]
async fn given_console_unreachable_when_executing_then_error_detail_and_no_watch() {
    let console = FakeConsole::refusing();
    let log = FakeLog::silent();
    let request = RestartRequest::new(RestartMethod::RemoteConsole, 10, 30, None).unwrap();

    let result = orchestrator(&console, "true", &log).execute(&request).await;

    let error = result.unwrap_err();
    assert!(!error.detail().is_empty());
    assert_that!(log.follows(), eq(0));
}

#[tokio::test(start_paused = true)]
async fn given_console_lost_during_countdown_when_executing_then_failed_phase_and_no_watch() {
    // Given
    let console = FakeConsole::new(StopReply::Disconnect).hanging_up_after(1);
    let log = FakeLog::emitting(&[(0, "Done (1s)!")]);
    let request = RestartRequest::new(RestartMethod::RemoteConsole, 3, 30, None).unwrap();
    let (phase_tx, phase_rx) = watch::channel(RestartPhase::Idle);

    // When
    let result = orchestrator(&console, "true", &log)
        .execute_observed(&request, &phase_tx)
        .await;

    // Then
    let error = result.unwrap_err();
    assert_that!(log.follows(), eq(0));
    match &*phase_rx.borrow() {
        RestartPhase::ActuationFailed { detail } => {
            assert_that!(detail.as_str(), eq(error.detail().as_str()));
        }
        other => panic!("expected ActuationFailed, got {other:?}"),
    };
}

#[tokio::test(start_paused = true)]
async fn given_actuate_only_when_called_then_log_untouched() {
    let console = FakeConsole::new(StopReply::Ack);
    let log = FakeLog::silent();
    let request = RestartRequest::new(RestartMethod::RemoteConsole, 1, 30, None).unwrap();

    let result = orchestrator(&console, "true", &log).actuate(&request).await;

    assert!(result.is_ok());
    assert_that!(log.follows(), eq(0));
}
