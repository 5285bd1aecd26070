//! Pepper Gate — gated release of a single embedded secret
//!
//! The secret ("pepper") is stored AES-256-CBC encrypted and only decrypted
//! after the runtime environment passes root and debugger checks and the
//! caller presents the expected identity token. Any failure yields an empty
//! result.

pub mod attest;
pub mod cipher;
pub mod codec;
pub mod error;
pub mod gate;
pub mod identity;

pub use attest::{AttestationReport, EnvironmentAttestor, EnvironmentProbe, HostEnvironment};
pub use error::{ConfigError, GateError};
pub use gate::{GateConfig, GateStage, SecretGate};
