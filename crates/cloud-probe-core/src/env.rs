// crates/cloud-probe-core/src/env.rs
// ============================================================================
// Module: Environment Snapshot
// Description: Point-in-time view of the process environment.
// Purpose: Provide ordered env capture, naming schemes, and port resolution.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! The deploying harness injects variables into the process environment
//! before start. The fixtures never mutate the environment; they capture a
//! fresh snapshot per request and render from it. Variable names are
//! harness-defined constants, not computed.

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable carrying the listen port for every fixture.
pub const LISTEN_PORT_VAR: &str = "PORT";

/// Listen port used when [`LISTEN_PORT_VAR`] is unset.
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

// ============================================================================
// SECTION: Naming Schemes
// ============================================================================

/// Environment variable naming scheme consumed by the greeting fixtures.
///
/// The harness deploys one fixture per scheme to check which naming scheme a
/// deployment target injects. The legacy fixture prefixes its greeting with a
/// marker so the harness can tell the two apart from response text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// Current variable names.
    Primary,
    /// Legacy variable names.
    Legacy,
}

impl NamingScheme {
    /// Returns the app host variable name for this scheme.
    #[must_use]
    pub const fn host_var(self) -> &'static str {
        match self {
            Self::Primary => "VCAP_APP_HOST",
            Self::Legacy => "VMC_APP_HOST",
        }
    }

    /// Returns the app port variable name for this scheme.
    #[must_use]
    pub const fn port_var(self) -> &'static str {
        match self {
            Self::Primary => "VCAP_APP_PORT",
            Self::Legacy => "VMC_APP_PORT",
        }
    }

    /// Returns the greeting marker prefix for this scheme.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Primary => "",
            Self::Legacy => "XXXXX ",
        }
    }
}

// ============================================================================
// SECTION: Environment Snapshot
// ============================================================================

/// One environment variable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// Ordered-by-discovery view of the process environment at a point in time.
///
/// # Invariants
/// - Entries are never mutated after capture.
/// - Enumeration order is whatever the runtime exposes; it is not guaranteed.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSnapshot {
    /// Captured entries in discovery order.
    entries: Vec<EnvEntry>,
}

impl EnvironmentSnapshot {
    /// Captures the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        let entries = std::env::vars()
            .map(|(name, value)| EnvEntry {
                name,
                value,
            })
            .collect();
        Self {
            entries,
        }
    }

    /// Builds a snapshot from explicit entries, preserving their order.
    #[must_use]
    pub const fn from_entries(entries: Vec<EnvEntry>) -> Self {
        Self {
            entries,
        }
    }

    /// Returns the first value recorded for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.name == name).map(|entry| entry.value.as_str())
    }

    /// Returns the captured entries in discovery order.
    #[must_use]
    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }
}

// ============================================================================
// SECTION: Port Resolution
// ============================================================================

/// Listen port resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The port variable was set but did not parse as a TCP port.
    #[error("invalid listen port in PORT: {value}")]
    Invalid {
        /// Raw environment value.
        value: String,
    },
}

/// Resolves the listen port from a snapshot.
///
/// An unset variable falls back to [`DEFAULT_LISTEN_PORT`]; a set but
/// unparsable value is a startup error rather than a silent fallback.
///
/// # Errors
/// Returns [`PortError::Invalid`] when the variable is set but unparsable.
pub fn resolve_port(snapshot: &EnvironmentSnapshot) -> Result<u16, PortError> {
    match snapshot.get(LISTEN_PORT_VAR) {
        None => Ok(DEFAULT_LISTEN_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| PortError::Invalid {
            value: raw.to_string(),
        }),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::DEFAULT_LISTEN_PORT;
    use super::EnvEntry;
    use super::EnvironmentSnapshot;
    use super::LISTEN_PORT_VAR;
    use super::NamingScheme;
    use super::PortError;
    use super::resolve_port;

    /// Result alias keeping assertions panic-free.
    type TestResult = Result<(), String>;

    /// Builds a snapshot from name/value pairs.
    fn snapshot(pairs: &[(&str, &str)]) -> EnvironmentSnapshot {
        let entries = pairs
            .iter()
            .map(|(name, value)| EnvEntry {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect();
        EnvironmentSnapshot::from_entries(entries)
    }

    #[test]
    fn capture_matches_process_environment_size() -> TestResult {
        let captured = EnvironmentSnapshot::capture();
        let expected = std::env::vars().count();
        if captured.entries().len() == expected {
            Ok(())
        } else {
            Err(format!(
                "captured {} entries, process exposes {expected}",
                captured.entries().len()
            ))
        }
    }

    #[test]
    fn get_returns_first_value_in_discovery_order() -> TestResult {
        let snapshot = snapshot(&[("A", "first"), ("A", "second")]);
        match snapshot.get("A") {
            Some("first") => Ok(()),
            Some(value) => Err(format!("expected first value, got {value}")),
            None => Err("expected first value, variable unset".to_string()),
        }
    }

    #[test]
    fn get_returns_none_for_unset_variable() -> TestResult {
        let snapshot = snapshot(&[("A", "1")]);
        match snapshot.get("MISSING") {
            None => Ok(()),
            Some(value) => Err(format!("expected unset variable, got {value}")),
        }
    }

    #[test]
    fn primary_scheme_uses_vcap_names() -> TestResult {
        if NamingScheme::Primary.host_var() != "VCAP_APP_HOST" {
            return Err("unexpected primary host variable".to_string());
        }
        if NamingScheme::Primary.port_var() != "VCAP_APP_PORT" {
            return Err("unexpected primary port variable".to_string());
        }
        if !NamingScheme::Primary.marker().is_empty() {
            return Err("primary scheme must not carry a marker".to_string());
        }
        Ok(())
    }

    #[test]
    fn legacy_scheme_uses_vmc_names_and_marker() -> TestResult {
        if NamingScheme::Legacy.host_var() != "VMC_APP_HOST" {
            return Err("unexpected legacy host variable".to_string());
        }
        if NamingScheme::Legacy.port_var() != "VMC_APP_PORT" {
            return Err("unexpected legacy port variable".to_string());
        }
        if NamingScheme::Legacy.marker() != "XXXXX " {
            return Err("unexpected legacy marker".to_string());
        }
        Ok(())
    }

    #[test]
    fn resolve_port_defaults_when_unset() -> TestResult {
        let port = resolve_port(&snapshot(&[])).map_err(|err| err.to_string())?;
        if port == DEFAULT_LISTEN_PORT {
            Ok(())
        } else {
            Err(format!("expected default port, got {port}"))
        }
    }

    #[test]
    fn resolve_port_reads_set_variable() -> TestResult {
        let port =
            resolve_port(&snapshot(&[(LISTEN_PORT_VAR, "9090")])).map_err(|err| err.to_string())?;
        if port == 9090 {
            Ok(())
        } else {
            Err(format!("expected 9090, got {port}"))
        }
    }

    #[test]
    fn resolve_port_rejects_unparsable_value() -> TestResult {
        match resolve_port(&snapshot(&[(LISTEN_PORT_VAR, "not-a-port")])) {
            Err(PortError::Invalid {
                value,
            }) if value == "not-a-port" => Ok(()),
            Err(error) => Err(format!("unexpected error: {error}")),
            Ok(port) => Err(format!("expected error, resolved {port}")),
        }
    }
}
