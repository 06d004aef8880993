// crates/cloud-probe-server/src/server.rs
// ============================================================================
// Module: Probe Server
// Description: Fixture routers and the bind/serve loop.
// Purpose: Serve the fixed probe routes until externally terminated.
// Dependencies: axum, cloud-probe-core, tokio
// ============================================================================

//! ## Overview
//! Each fixture kind maps to a small axum router over the fixed routes the
//! harness probes. Serving is deliberately bare: bind, write one startup
//! line with the resolved address, then run until the process is killed.
//! Bind failure propagates as an error and ends the process; there is no
//! retry, timeout, or recovery path.

use std::io::Write;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use cloud_probe_core::NamingScheme;
use cloud_probe_core::render_env_listing;
use cloud_probe_core::render_greeting;
use cloud_probe_core::render_runtime_version;
use thiserror::Error;

use crate::source::SharedEnvSource;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefix of the single informational startup line written to stdout.
pub const STARTUP_LINE_PREFIX: &str = "probe server listening on ";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Fixture served by a probe server instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    /// Greeting fixture reading the primary variable names.
    Hello,
    /// Greeting fixture reading the legacy variable names, marker-prefixed.
    HelloLegacy,
    /// Catch-all fixture reporting the runtime version string.
    RuntimeVersion,
}

/// Probe server configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Socket address to bind.
    pub bind: SocketAddr,
    /// Fixture to serve.
    pub fixture: FixtureKind,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Probe server failures.
///
/// All variants are fatal; callers propagate them to process exit.
#[derive(Debug, Error)]
pub enum ProbeServerError {
    /// Listener bind failed.
    #[error("probe server bind failed on {bind}: {source}")]
    Bind {
        /// Requested bind address.
        bind: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Startup line write failed.
    #[error("probe server startup line write failed: {source}")]
    Startup {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Serve loop failed.
    #[error("probe server failed: {source}")]
    Serve {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// SECTION: Probe Server
// ============================================================================

/// Probe server instance.
pub struct ProbeServer {
    /// Server configuration.
    config: ProbeConfig,
    /// Environment source for request handlers.
    env: SharedEnvSource,
}

impl ProbeServer {
    /// Builds a new probe server over an environment source.
    #[must_use]
    pub fn new(config: ProbeConfig, env: SharedEnvSource) -> Self {
        Self {
            config,
            env,
        }
    }

    /// Binds the listener, writes the startup line, and serves requests.
    ///
    /// The startup line reports the resolved address, so a bind to port 0
    /// reports the OS-assigned port. Returns only on failure; termination is
    /// an external signal against the process.
    ///
    /// # Errors
    /// Returns [`ProbeServerError`] when binding, startup output, or the
    /// serve loop fails.
    pub async fn serve(self) -> Result<(), ProbeServerError> {
        let listener =
            tokio::net::TcpListener::bind(self.config.bind).await.map_err(|source| {
                ProbeServerError::Bind {
                    bind: self.config.bind,
                    source,
                }
            })?;
        let addr = listener.local_addr().map_err(|source| ProbeServerError::Bind {
            bind: self.config.bind,
            source,
        })?;
        write_startup_line(addr).map_err(|source| ProbeServerError::Startup {
            source,
        })?;
        let app = build_router(self.config.fixture, self.env);
        axum::serve(listener, app).await.map_err(|source| ProbeServerError::Serve {
            source,
        })
    }
}

/// Writes the single informational startup line to stdout.
fn write_startup_line(addr: SocketAddr) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{STARTUP_LINE_PREFIX}{addr}")?;
    stdout.flush()
}

// ============================================================================
// SECTION: Routers
// ============================================================================

/// Handler state for the greeting fixtures.
#[derive(Clone)]
struct GreetingState {
    /// Environment source captured per request.
    env: SharedEnvSource,
    /// Variable naming scheme to render with.
    scheme: NamingScheme,
}

/// Builds the router for a fixture kind.
#[must_use]
pub fn build_router(fixture: FixtureKind, env: SharedEnvSource) -> Router {
    match fixture {
        FixtureKind::Hello => greeting_router(env, NamingScheme::Primary),
        FixtureKind::HelloLegacy => greeting_router(env, NamingScheme::Legacy),
        FixtureKind::RuntimeVersion => version_router(),
    }
}

/// Builds the two-route greeting router for a naming scheme.
fn greeting_router(env: SharedEnvSource, scheme: NamingScheme) -> Router {
    let state = GreetingState {
        env,
        scheme,
    };
    Router::new()
        .route("/", get(handle_greeting))
        .route("/env", get(handle_env_listing))
        .with_state(state)
}

/// Builds the catch-all runtime version router.
fn version_router() -> Router {
    Router::new()
        .route("/", get(handle_runtime_version))
        .route("/{*path}", get(handle_runtime_version))
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Serves `GET /` on the greeting fixtures.
#[allow(clippy::unused_async, reason = "axum handlers must be async.")]
async fn handle_greeting(State(state): State<GreetingState>) -> Html<String> {
    Html(render_greeting(&state.env.snapshot(), state.scheme))
}

/// Serves `GET /env` on the greeting fixtures.
#[allow(clippy::unused_async, reason = "axum handlers must be async.")]
async fn handle_env_listing(State(state): State<GreetingState>) -> Html<String> {
    Html(render_env_listing(&state.env.snapshot()))
}

/// Serves every `GET` path on the version fixture.
#[allow(clippy::unused_async, reason = "axum handlers must be async.")]
async fn handle_runtime_version() -> String {
    render_runtime_version()
}
