// crates/cloud-probe-server/src/source.rs
// ============================================================================
// Module: Environment Source
// Description: Seam between request handlers and the process environment.
// Purpose: Let tests inject deterministic environments without env mutation.
// Dependencies: cloud-probe-core
// ============================================================================

//! ## Overview
//! Handlers capture the environment through an [`EnvSource`] rather than
//! reading `std::env` directly. Production fixtures use
//! [`ProcessEnvSource`]; tests substitute fixed or mutable sources to probe
//! per-request capture without touching the process environment.

use std::sync::Arc;

use cloud_probe_core::EnvironmentSnapshot;

/// Source of environment snapshots for request handlers.
pub trait EnvSource: Send + Sync {
    /// Captures a snapshot of the environment this source exposes.
    fn snapshot(&self) -> EnvironmentSnapshot;
}

/// Shared handle to an environment source.
pub type SharedEnvSource = Arc<dyn EnvSource>;

/// Environment source backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvSource;

impl EnvSource for ProcessEnvSource {
    fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot::capture()
    }
}
