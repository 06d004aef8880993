// crates/cloud-probe-core/src/lib.rs
// ============================================================================
// Module: Cloud Probe Core Library
// Description: Environment snapshot model and probe response rendering.
// Purpose: Single source of truth for fixture response text and env names.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! `cloud-probe-core` defines the environment snapshot model and the exact
//! response bodies the probe fixtures serve. The deployment-verification
//! harness asserts on these strings byte for byte, so all rendering lives
//! here and the server layer never formats responses on its own.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod render;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use env::DEFAULT_LISTEN_PORT;
pub use env::EnvEntry;
pub use env::EnvironmentSnapshot;
pub use env::LISTEN_PORT_VAR;
pub use env::NamingScheme;
pub use env::PortError;
pub use env::resolve_port;
pub use render::RUNTIME_VERSION;
pub use render::render_env_listing;
pub use render::render_greeting;
pub use render::render_runtime_version;
