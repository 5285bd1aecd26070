use super::config::GateConfig;
use crate::attest::{AttestationReport, EnvironmentAttestor, EnvironmentProbe, HostEnvironment};
use crate::cipher;
use crate::codec;
use crate::error::GateError;
use crate::identity;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Where a request is in the release protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    Start,
    Attesting,
    IdentityChecking,
    Decrypting,
    Released,
    Denied,
}

impl fmt::Display for GateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateStage::Start => "start",
            GateStage::Attesting => "attesting",
            GateStage::IdentityChecking => "identity-checking",
            GateStage::Decrypting => "decrypting",
            GateStage::Released => "released",
            GateStage::Denied => "denied",
        };
        f.write_str(name)
    }
}

/// The gate. Holds only immutable configuration, so one instance can serve
/// concurrent requests from any number of threads.
pub struct SecretGate<P = HostEnvironment> {
    config: GateConfig,
    attestor: EnvironmentAttestor<P>,
}

impl SecretGate<HostEnvironment> {
    /// Gate over the real host environment
    pub fn new(config: GateConfig) -> Self {
        Self::with_probe(config, HostEnvironment)
    }
}

impl<P: EnvironmentProbe> SecretGate<P> {
    /// Gate over a caller-supplied environment probe
    pub fn with_probe(config: GateConfig, probe: P) -> Self {
        let attestor = EnvironmentAttestor::with_probe(probe, config.attestation.clone());
        Self { config, attestor }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run attestation on its own
    pub fn attest(&self) -> AttestationReport {
        self.attestor.attest()
    }

    /// Entry point for the calling application.
    ///
    /// Returns the secret, or an empty string if any stage denies. The
    /// empty string is the only failure signal.
    pub fn request_secret(&self, identity_token: &str) -> Zeroizing<String> {
        match self.evaluate(identity_token) {
            Ok(secret) => {
                log::info!("secret released");
                secret
            }
            Err(_) => {
                log::warn!("secret release denied");
                Zeroizing::new(String::new())
            }
        }
    }

    /// Run the release protocol and report which stage denied.
    ///
    /// For host-side diagnostics only. Handing the error to the calling
    /// application tells an attacker which check to defeat next.
    pub fn evaluate(&self, identity_token: &str) -> Result<Zeroizing<String>, GateError> {
        // Attesting
        if self.attestor.attest().is_compromised() {
            return Err(GateError::EnvironmentCompromised);
        }

        // IdentityChecking. An empty token on either side never matches.
        if identity_token.is_empty() || self.config.known_identity.is_empty() {
            return Err(GateError::EmptyIdentity);
        }
        if !identity::verify(identity_token, &self.config.known_identity) {
            return Err(GateError::IdentityMismatch);
        }

        // Decrypting
        self.unseal()
    }

    /// Terminal stage a request ends in
    pub fn outcome(&self, identity_token: &str) -> GateStage {
        match self.evaluate(identity_token) {
            Ok(_) => GateStage::Released,
            Err(_) => GateStage::Denied,
        }
    }

    fn unseal(&self) -> Result<Zeroizing<String>, GateError> {
        let key = codec::decode(&self.config.key_hex)?;
        let iv = codec::decode(&self.config.iv_hex)?;
        let mut plaintext = cipher::decrypt(&key, &iv, &self.config.ciphertext)?;

        match String::from_utf8(std::mem::take(&mut *plaintext)) {
            Ok(secret) if !secret.is_empty() => Ok(Zeroizing::new(secret)),
            Ok(_) => Err(GateError::InvalidPlaintext),
            Err(err) => {
                err.into_bytes().zeroize();
                Err(GateError::InvalidPlaintext)
            }
        }
    }
}
