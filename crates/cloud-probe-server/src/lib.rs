// crates/cloud-probe-server/src/lib.rs
// ============================================================================
// Module: Cloud Probe Server Library
// Description: HTTP serving layer for the probe fixtures.
// Purpose: Expose fixture routes over axum with per-request env capture.
// Dependencies: axum, cloud-probe-core, tokio
// ============================================================================

//! ## Overview
//! `cloud-probe-server` binds a TCP listener and serves the fixed probe
//! routes over HTTP/1.1. Handlers are stateless: every request captures a
//! fresh environment snapshot through an [`source::EnvSource`], so responses
//! always reflect the environment at the instant of handling and no state
//! leaks between requests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod server;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use server::FixtureKind;
pub use server::ProbeConfig;
pub use server::ProbeServer;
pub use server::ProbeServerError;
pub use server::STARTUP_LINE_PREFIX;
pub use server::build_router;
pub use source::EnvSource;
pub use source::ProcessEnvSource;
pub use source::SharedEnvSource;
