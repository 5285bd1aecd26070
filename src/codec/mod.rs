//! Hex codec for build-injected key material
//!
//! Key and IV arrive as hexadecimal strings. Decoding is strict: odd length
//! or any character outside `[0-9a-fA-F]` is rejected.

mod hex;

pub use self::hex::{decode, encode};
