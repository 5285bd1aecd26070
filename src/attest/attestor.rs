//! The attestor — runs both environment checks against a probe

use super::debugger::parse_tracer_pid;
use super::probe::{EnvironmentProbe, HostEnvironment};
use super::root::{default_root_indicators, find_root_indicator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_STATUS_PATH: &str = "/proc/self/status";

fn default_status_path() -> PathBuf {
    PathBuf::from(DEFAULT_STATUS_PATH)
}

/// Where the attestor looks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttestationConfig {
    /// Paths whose existence indicates a rooted device
    #[serde(default = "default_root_indicators")]
    pub root_indicators: Vec<PathBuf>,
    /// Process status pseudo-file carrying `TracerPid`
    #[serde(default = "default_status_path")]
    pub status_path: PathBuf,
}

impl Default for AttestationConfig {
    fn default() -> Self {
        Self {
            root_indicators: default_root_indicators(),
            status_path: default_status_path(),
        }
    }
}

/// Outcome of one attestation pass. Never cached.
#[derive(Debug, Clone, Serialize)]
pub struct AttestationReport {
    pub rooted: bool,
    pub debugger_attached: bool,
    pub checked_at: DateTime<Utc>,
}

impl AttestationReport {
    pub fn is_compromised(&self) -> bool {
        self.rooted || self.debugger_attached
    }
}

/// Runs the root and debugger checks
pub struct EnvironmentAttestor<P = HostEnvironment> {
    probe: P,
    config: AttestationConfig,
}

impl EnvironmentAttestor<HostEnvironment> {
    /// Attestor over the real host
    pub fn host(config: AttestationConfig) -> Self {
        Self::with_probe(HostEnvironment, config)
    }
}

impl<P: EnvironmentProbe> EnvironmentAttestor<P> {
    pub fn with_probe(probe: P, config: AttestationConfig) -> Self {
        Self { probe, config }
    }

    pub fn config(&self) -> &AttestationConfig {
        &self.config
    }

    /// True if any root indicator exists
    pub fn is_rooted(&self) -> bool {
        find_root_indicator(&self.probe, &self.config.root_indicators).is_some()
    }

    /// True if the status record reports a tracer. A `TracerPid` value that
    /// does not parse counts as a tracer.
    ///
    /// Known limitation: when the status record cannot be read at all (no
    /// procfs on this platform), this check is inert and returns false.
    pub fn is_debugger_attached(&self) -> bool {
        let Some(status) = self.probe.read_status(&self.config.status_path) else {
            log::debug!(
                "status record {} unavailable, debugger check inert",
                self.config.status_path.display()
            );
            return false;
        };

        parse_tracer_pid(&status).denies()
    }

    /// Run both checks. Both always execute so the report is complete.
    pub fn attest(&self) -> AttestationReport {
        AttestationReport {
            rooted: self.is_rooted(),
            debugger_attached: self.is_debugger_attached(),
            checked_at: Utc::now(),
        }
    }
}
