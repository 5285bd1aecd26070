use crate::error::GateError;
use ::hex::FromHexError;
use zeroize::Zeroizing;

/// Decode a hex string into bytes
///
/// The returned buffer is wiped when dropped, since the input is usually
/// key material.
pub fn decode(hex: &str) -> Result<Zeroizing<Vec<u8>>, GateError> {
    ::hex::decode(hex).map(Zeroizing::new).map_err(|e| {
        let reason = match e {
            FromHexError::OddLength => "odd number of hex digits".to_string(),
            FromHexError::InvalidHexCharacter { index, .. } => {
                format!("non-hex character at offset {}", index)
            }
            FromHexError::InvalidStringLength => "invalid string length".to_string(),
        };
        GateError::MalformedInput(reason)
    })
}

/// Encode bytes as lowercase hex
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
