use crate::error::GateError;
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

/// AES-256 key length
pub const KEY_LEN: usize = 32;
/// CBC initialization vector length
pub const IV_LEN: usize = 16;
/// AES block length
pub const BLOCK_LEN: usize = 16;

type Aes256CbcDec = cbc::Decryptor<Aes256>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;

fn check_key_material(key: &[u8], iv: &[u8]) -> Result<(), GateError> {
    if key.len() != KEY_LEN || iv.len() != IV_LEN {
        return Err(GateError::InvalidKeyMaterial {
            key_len: key.len(),
            iv_len: iv.len(),
        });
    }
    Ok(())
}

/// Decrypt `ciphertext` and strip its PKCS#7 padding.
///
/// The padding is checked in full: every one of the last `p` bytes must
/// equal `p`, with `1 <= p <= 16`. A wrong key or IV almost always fails
/// here rather than yielding truncated garbage.
pub fn decrypt(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, GateError> {
    check_key_material(key, iv)?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(GateError::InvalidCiphertext {
            len: ciphertext.len(),
        });
    }

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        GateError::InvalidKeyMaterial {
            key_len: key.len(),
            iv_len: iv.len(),
        }
    })?;

    let plaintext_len = cipher
        .decrypt_padded_mut::<Pkcs7>(buffer.as_mut_slice())
        .map_err(|_| GateError::InvalidPadding)?
        .len();
    buffer.truncate(plaintext_len);

    Ok(buffer)
}

/// Encrypt `plaintext` with PKCS#7 padding. Inverse of [`decrypt`].
///
/// Produces ciphertexts in the layout the gate expects.
pub fn seal(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, GateError> {
    check_key_material(key, iv)?;
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| {
        GateError::InvalidKeyMaterial {
            key_len: key.len(),
            iv_len: iv.len(),
        }
    })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}
