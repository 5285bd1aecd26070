//! Caller identity — verification and token construction
//!
//! The calling application proves who it is with a token derived from its
//! signing certificates. The gate compares that token against one known-good
//! value.

mod signature;
mod verify;

pub use signature::signing_identity;
pub use verify::verify;
