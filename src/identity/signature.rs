use sha2::{Digest, Sha256};

/// Build the identity token for a set of signing certificates.
///
/// Each certificate is hashed with SHA-256 and rendered as lowercase hex; the
/// digests are sorted and concatenated so the token does not depend on the
/// order the platform reports signers in. `None` if there are no certificates.
pub fn signing_identity<C: AsRef<[u8]>>(certificates: &[C]) -> Option<String> {
    if certificates.is_empty() {
        return None;
    }

    let mut digests: Vec<String> = certificates
        .iter()
        .map(|cert| hex::encode(Sha256::digest(cert.as_ref())))
        .collect();
    digests.sort();
    Some(digests.concat())
}
