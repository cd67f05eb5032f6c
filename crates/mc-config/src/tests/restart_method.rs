use crate::RestartMethod;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_local_systemd_in_any_case_when_parsed_then_local_supervisor() {
    for input in ["LOCAL_SYSTEMD", "local_systemd", " Local_Systemd "] {
        assert_that!(RestartMethod::parse(input), eq(RestartMethod::LocalSupervisor));
    }
}

#[test]
fn given_rcon_when_parsed_then_remote_console() {
    assert_that!(RestartMethod::parse("RCON"), eq(RestartMethod::RemoteConsole));
}

#[test]
fn given_unknown_value_when_parsed_then_falls_back_to_remote_console() {
    for input in ["", "systemd", "docker", "LOCAL"] {
        assert_that!(RestartMethod::parse(input), eq(RestartMethod::RemoteConsole));
    }
}

#[test]
fn given_method_when_displayed_then_uses_env_spelling() {
    assert_that!(RestartMethod::RemoteConsole.to_string().as_str(), eq("RCON"));
    assert_that!(
        RestartMethod::LocalSupervisor.to_string().as_str(),
        eq("LOCAL_SYSTEMD")
    );
}
