use sha2::{Digest, Sha256};

/// Stable SHA-256 fingerprint of a structural finding.
///
/// Identity is the finding code plus its document path, so the same problem in
/// the same place keeps its fingerprint across runs and message rewording.
pub fn fingerprint(code: &str, path: &str) -> String {
    let canonical = [code, path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
