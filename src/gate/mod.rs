//! Secret Gate — releases the secret only to a clean environment and the right caller
//!
//! Stages, in order, each able to end in `Denied`:
//! 1. **Attesting**: root indicators and debugger
//! 2. **IdentityChecking**: caller token against the known-good token
//! 3. **Decrypting**: hex-decode key/IV, AES-256-CBC, PKCS#7
//!
//! Every denial looks the same from outside: an empty result.

mod config;
mod secret_gate;

pub use config::GateConfig;
pub use secret_gate::{GateStage, SecretGate};
