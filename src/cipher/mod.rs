//! AES-256-CBC unsealing of the embedded secret
//!
//! - Key: 32 bytes, IV: 16 bytes, ciphertext: non-empty multiple of 16
//! - Padding: PKCS#7, fully validated
//! - All intermediate buffers are wiped on drop

mod decryptor;

pub use decryptor::{decrypt, seal, BLOCK_LEN, IV_LEN, KEY_LEN};
