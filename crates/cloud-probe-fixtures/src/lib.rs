// crates/cloud-probe-fixtures/src/lib.rs
// ============================================================================
// Module: Cloud Probe Fixtures Library
// Description: Shared launch path for the deployable fixture binaries.
// Purpose: Resolve the listen port from the environment and run a fixture.
// Dependencies: cloud-probe-core, cloud-probe-server
// ============================================================================

//! ## Overview
//! Each fixture binary is a thin wrapper around [`run_fixture`]: capture the
//! environment, resolve the listen port, bind on all interfaces, and serve
//! until externally terminated. The harness sets variables before process
//! start; the fixtures take no CLI flags.

use std::io::Write;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use cloud_probe_core::EnvironmentSnapshot;
use cloud_probe_core::PortError;
use cloud_probe_core::resolve_port;
use cloud_probe_server::FixtureKind;
use cloud_probe_server::ProbeConfig;
use cloud_probe_server::ProbeServer;
use cloud_probe_server::ProbeServerError;
use cloud_probe_server::ProcessEnvSource;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fixture launch failures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Listen port resolution failed.
    #[error(transparent)]
    Port(#[from] PortError),
    /// Probe server failed.
    #[error(transparent)]
    Server(#[from] ProbeServerError),
}

// ============================================================================
// SECTION: Launch
// ============================================================================

/// Runs a fixture against the process environment.
///
/// Returns only on failure; a healthy fixture serves until the process is
/// terminated by the deploying harness.
///
/// # Errors
/// Returns [`FixtureError`] when the port variable is unparsable or the
/// server fails to bind or serve.
pub async fn run_fixture(fixture: FixtureKind) -> Result<(), FixtureError> {
    let snapshot = EnvironmentSnapshot::capture();
    let port = resolve_port(&snapshot)?;
    let config = ProbeConfig {
        bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        fixture,
    };
    let server = ProbeServer::new(config, Arc::new(ProcessEnvSource));
    server.serve().await?;
    Ok(())
}

/// Reports a launch failure on stderr and returns the failure exit code.
#[must_use]
pub fn report_failure(error: &FixtureError) -> ExitCode {
    let _ = write_stderr_line(&error.to_string());
    ExitCode::FAILURE
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}
