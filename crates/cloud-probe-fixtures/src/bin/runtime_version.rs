// crates/cloud-probe-fixtures/src/bin/runtime_version.rs
// ============================================================================
// Module: Runtime Version Fixture
// Description: Catch-all fixture reporting the runtime version string.
// Purpose: Give the harness a fixed-body probe target with a startup line.
// Dependencies: cloud-probe-fixtures, cloud-probe-server, tokio
// ============================================================================

//! ## Overview
//! Deployable fixture answering every `GET` path with
//! `running version {version}` as plain text.

use std::process::ExitCode;

use cloud_probe_fixtures::report_failure;
use cloud_probe_fixtures::run_fixture;
use cloud_probe_server::FixtureKind;

/// Fixture entry point.
#[tokio::main]
async fn main() -> ExitCode {
    match run_fixture(FixtureKind::RuntimeVersion).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}
