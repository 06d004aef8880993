// crates/cloud-probe-fixtures/src/bin/hello_env_legacy.rs
// ============================================================================
// Module: Hello Env Legacy Fixture
// Description: Greeting fixture reading the legacy variable names.
// Purpose: Let the harness detect legacy naming schemes by response marker.
// Dependencies: cloud-probe-fixtures, cloud-probe-server, tokio
// ============================================================================

//! ## Overview
//! Deployable greeting fixture for the legacy naming scheme
//! (`VMC_APP_HOST` / `VMC_APP_PORT`). Its greeting is marker-prefixed so the
//! harness can distinguish it from the primary fixture by text alone.

use std::process::ExitCode;

use cloud_probe_fixtures::report_failure;
use cloud_probe_fixtures::run_fixture;
use cloud_probe_server::FixtureKind;

/// Fixture entry point.
#[tokio::main]
async fn main() -> ExitCode {
    match run_fixture(FixtureKind::HelloLegacy).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}
