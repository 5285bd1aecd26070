//! Error types for the gate and its configuration
//!
//! Every `GateError` is collapsed into the same empty result before it
//! reaches the calling application. The variants exist for tests and for
//! host-side diagnostics only.

use crate::gate::GateStage;

/// Reasons the gate refuses to release the secret
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid key material: key is {key_len} bytes, IV is {iv_len} bytes")]
    InvalidKeyMaterial { key_len: usize, iv_len: usize },

    #[error("Invalid ciphertext length: {len} bytes")]
    InvalidCiphertext { len: usize },

    #[error("Invalid PKCS#7 padding")]
    InvalidPadding,

    #[error("Decrypted secret is empty or not UTF-8")]
    InvalidPlaintext,

    #[error("Environment compromised")]
    EnvironmentCompromised,

    #[error("Caller identity mismatch")]
    IdentityMismatch,

    #[error("Identity token is empty")]
    EmptyIdentity,
}

impl GateError {
    /// The stage at which the gate moved to `Denied`
    pub fn stage(&self) -> GateStage {
        match self {
            GateError::EnvironmentCompromised => GateStage::Attesting,
            GateError::IdentityMismatch | GateError::EmptyIdentity => {
                GateStage::IdentityChecking
            }
            GateError::MalformedInput(_)
            | GateError::InvalidKeyMaterial { .. }
            | GateError::InvalidCiphertext { .. }
            | GateError::InvalidPadding
            | GateError::InvalidPlaintext => GateStage::Decrypting,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
