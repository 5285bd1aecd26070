//! Environment attestation — root and debugger detection
//!
//! Two independent, read-only checks run on every gate request:
//! - **Root scan**: does any path from a denylist of root-enabling binaries exist?
//! - **Debugger scan**: does the process status record report a nonzero `TracerPid`?
//!
//! OS access goes through [`EnvironmentProbe`] so the checks can be driven by
//! fakes in tests.

mod attestor;
mod debugger;
mod probe;
mod root;

pub use attestor::{AttestationConfig, AttestationReport, EnvironmentAttestor};
pub use debugger::{parse_tracer_pid, TracerStatus};
pub use probe::{EnvironmentProbe, HostEnvironment, StaticEnvironment};
pub use root::{default_root_indicators, ROOT_INDICATORS};
