use crate::{ActuationError, ActuationOutcome, ActuationResult};

use mc_proto::ProtoError;

use std::panic::Location;

use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_success_when_flattened_then_succeeded_without_detail() {
    let result: ActuationResult<()> = Ok(());

    let outcome = ActuationOutcome::from(&result);

    assert_that!(outcome.succeeded, eq(true));
    assert_that!(outcome.error_detail, none());
}

#[test]
fn given_supervisor_failure_when_flattened_then_detail_is_stderr() {
    // Given
    let result: ActuationResult<()> = Err(ActuationError::SupervisorFailed {
        program: String::from("systemctl"),
        unit: String::from("minecraft"),
        code: Some(5),
        stderr: String::from("Unit minecraft.service not found."),
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let outcome = ActuationOutcome::from(&result);

    // Then
    assert_that!(outcome.succeeded, eq(false));
    assert_that!(
        outcome.error_detail.as_deref(),
        some(eq("Unit minecraft.service not found."))
    );
}

#[test]
fn given_console_failure_when_flattened_then_detail_names_the_protocol_error() {
    let result: ActuationResult<()> = Err(ActuationError::from(ProtoError::closed()));

    let outcome = ActuationOutcome::from(&result);

    assert_that!(outcome.succeeded, eq(false));
    assert!(outcome.error_detail.is_some_and(|d| !d.is_empty()));
}
