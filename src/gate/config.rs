//! Gate configuration — the build-injected secret material
//!
//! Loaded once at startup and immutable afterwards. JSON layout:
//!
//! ```json
//! {
//!   "key_hex": "<64 hex digits>",
//!   "iv_hex": "<32 hex digits>",
//!   "ciphertext": "<hex>",
//!   "known_identity": "<token>",
//!   "attestation": { "root_indicators": ["/sbin/su"], "status_path": "/proc/self/status" }
//! }
//! ```
//!
//! `attestation` and both of its fields are optional.

use crate::attest::AttestationConfig;
use crate::cipher::{BLOCK_LEN, IV_LEN, KEY_LEN};
use crate::codec;
use crate::error::{ConfigError, GateError};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct GateConfig {
    /// AES-256 key, hex encoded
    pub key_hex: String,
    /// CBC IV, hex encoded
    pub iv_hex: String,
    /// Sealed secret
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
    /// The only caller identity token allowed to receive the secret
    pub known_identity: String,
    #[serde(default)]
    #[zeroize(skip)]
    pub attestation: AttestationConfig,
}

impl GateConfig {
    pub fn new(
        key_hex: impl Into<String>,
        iv_hex: impl Into<String>,
        ciphertext: impl Into<Vec<u8>>,
        known_identity: impl Into<String>,
    ) -> Self {
        Self {
            key_hex: key_hex.into(),
            iv_hex: iv_hex.into(),
            ciphertext: ciphertext.into(),
            known_identity: known_identity.into(),
            attestation: AttestationConfig::default(),
        }
    }

    pub fn with_attestation(mut self, attestation: AttestationConfig) -> Self {
        self.attestation = attestation;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = zeroize::Zeroizing::new(std::fs::read_to_string(path.as_ref())?);
        let config = Self::from_json(&json)?;
        log::info!("Loaded gate config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the key, IV, ciphertext and identity invariants without decrypting.
    ///
    /// The gate repeats these checks on every request; this is for catching
    /// a bad config early.
    pub fn validate(&self) -> Result<(), GateError> {
        let key = codec::decode(&self.key_hex)?;
        let iv = codec::decode(&self.iv_hex)?;
        if key.len() != KEY_LEN || iv.len() != IV_LEN {
            return Err(GateError::InvalidKeyMaterial {
                key_len: key.len(),
                iv_len: iv.len(),
            });
        }
        if self.ciphertext.is_empty() || self.ciphertext.len() % BLOCK_LEN != 0 {
            return Err(GateError::InvalidCiphertext {
                len: self.ciphertext.len(),
            });
        }
        if self.known_identity.is_empty() {
            return Err(GateError::EmptyIdentity);
        }
        Ok(())
    }
}

impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("key_hex", &"<redacted>")
            .field("iv_hex", &"<redacted>")
            .field("ciphertext", &format_args!("<{} bytes>", self.ciphertext.len()))
            .field("known_identity", &"<redacted>")
            .field("attestation", &self.attestation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const IV_HEX: &str = "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf";
    const PEPPER_CT: &str = "d071ddc9970872d979757649774018f8";

    fn sample_json() -> String {
        format!(
            r#"{{"key_hex":"{}","iv_hex":"{}","ciphertext":"{}","known_identity":"app-sig"}}"#,
            KEY_HEX, IV_HEX, PEPPER_CT
        )
    }

    #[test]
    fn test_from_json_defaults_attestation() {
        let config = GateConfig::from_json(&sample_json()).unwrap();
        assert_eq!(config.ciphertext, hex::decode(PEPPER_CT).unwrap());
        assert_eq!(config.known_identity, "app-sig");
        assert_eq!(config.attestation, AttestationConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gate.json");
        std::fs::write(&path, sample_json()).unwrap();

        let config = GateConfig::load(&path).unwrap();
        assert_eq!(config.key_hex, KEY_HEX);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GateConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_bad_ciphertext_hex_rejected() {
        let json = sample_json().replace(PEPPER_CT, "xyz");
        assert!(matches!(GateConfig::from_json(&json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_custom_attestation_section() {
        let json = format!(
            r#"{{"key_hex":"{}","iv_hex":"{}","ciphertext":"{}","known_identity":"x",
                "attestation":{{"root_indicators":["/opt/su"]}}}}"#,
            KEY_HEX, IV_HEX, PEPPER_CT
        );
        let config = GateConfig::from_json(&json).unwrap();
        assert_eq!(config.attestation.root_indicators, vec![PathBuf::from("/opt/su")]);
        assert_eq!(config.attestation.status_path, PathBuf::from("/proc/self/status"));
    }

    #[test]
    fn test_validate_short_key() {
        let config = GateConfig::new(&KEY_HEX[..62], IV_HEX, hex::decode(PEPPER_CT).unwrap(), "x");
        assert_eq!(
            config.validate(),
            Err(GateError::InvalidKeyMaterial { key_len: 31, iv_len: 16 })
        );
    }

    #[test]
    fn test_validate_malformed_iv() {
        let config = GateConfig::new(KEY_HEX, "zz", hex::decode(PEPPER_CT).unwrap(), "x");
        assert!(matches!(config.validate(), Err(GateError::MalformedInput(_))));
    }

    #[test]
    fn test_validate_ciphertext_blocks() {
        let config = GateConfig::new(KEY_HEX, IV_HEX, vec![0u8; 15], "x");
        assert_eq!(config.validate(), Err(GateError::InvalidCiphertext { len: 15 }));
    }

    #[test]
    fn test_validate_empty_identity() {
        let config = GateConfig::new(KEY_HEX, IV_HEX, hex::decode(PEPPER_CT).unwrap(), "");
        assert_eq!(config.validate(), Err(GateError::EmptyIdentity));

        let json = sample_json().replace("app-sig", "");
        let loaded = GateConfig::from_json(&json).unwrap();
        assert_eq!(loaded.validate(), Err(GateError::EmptyIdentity));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = GateConfig::from_json(&sample_json()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(KEY_HEX));
        assert!(!debug.contains(IV_HEX));
        assert!(!debug.contains("app-sig"));
        assert!(debug.contains("<16 bytes>"));
    }

    #[test]
    fn test_zeroize_clears_secret_fields() {
        let mut config = GateConfig::from_json(&sample_json()).unwrap();
        config.zeroize();
        assert!(config.key_hex.is_empty());
        assert!(config.iv_hex.is_empty());
        assert!(config.ciphertext.is_empty());
        assert!(config.known_identity.is_empty());
    }
}
