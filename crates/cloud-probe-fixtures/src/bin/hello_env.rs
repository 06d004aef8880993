// crates/cloud-probe-fixtures/src/bin/hello_env.rs
// ============================================================================
// Module: Hello Env Fixture
// Description: Greeting fixture reading the primary variable names.
// Purpose: Serve `/` and `/env` for the deployment-verification harness.
// Dependencies: cloud-probe-fixtures, cloud-probe-server, tokio
// ============================================================================

//! ## Overview
//! Deployable greeting fixture for the primary naming scheme
//! (`VCAP_APP_HOST` / `VCAP_APP_PORT`).

use std::process::ExitCode;

use cloud_probe_fixtures::report_failure;
use cloud_probe_fixtures::run_fixture;
use cloud_probe_server::FixtureKind;

/// Fixture entry point.
#[tokio::main]
async fn main() -> ExitCode {
    match run_fixture(FixtureKind::Hello).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}
