// crates/cloud-probe-core/src/render.rs
// ============================================================================
// Module: Response Rendering
// Description: Exact response bodies served by the probe fixtures.
// Purpose: Keep harness-asserted text in one place, byte for byte.
// Dependencies: env
// ============================================================================

//! ## Overview
//! Every body the fixtures serve is rendered here. The harness compares
//! response text exactly, so the greeting separator is preserved even when
//! both substitutions are blank and the env listing uses a fixed
//! `name: value<br/>` line shape. Missing variables substitute as empty
//! strings; rendering never fails.

use crate::env::EnvironmentSnapshot;
use crate::env::NamingScheme;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Version identifier baked into the fixture build.
pub const RUNTIME_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the greeting body for `GET /` on the greeting fixtures.
///
/// Missing host or port variables degrade to blank substitutions; the
/// literal `via: {host}:{port}` separator is always present.
#[must_use]
pub fn render_greeting(snapshot: &EnvironmentSnapshot, scheme: NamingScheme) -> String {
    let host = snapshot.get(scheme.host_var()).unwrap_or_default();
    let port = snapshot.get(scheme.port_var()).unwrap_or_default();
    format!("<h1>{}Hello from the Cloud! via: {host}:{port}</h1>", scheme.marker())
}

/// Renders the environment listing body for `GET /env`.
///
/// One `name: value<br/>` line per captured entry, in discovery order.
#[must_use]
pub fn render_env_listing(snapshot: &EnvironmentSnapshot) -> String {
    let mut body = String::new();
    for entry in snapshot.entries() {
        body.push_str(&entry.name);
        body.push_str(": ");
        body.push_str(&entry.value);
        body.push_str("<br/>");
    }
    body
}

/// Renders the runtime version body served by the version fixture.
#[must_use]
pub fn render_runtime_version() -> String {
    format!("running version {RUNTIME_VERSION}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
