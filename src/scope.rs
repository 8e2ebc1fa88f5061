//! Scope identifier derivation.
//!
//! Every compile of the same source text must land on the same identifier,
//! because the identifier doubles as the page-wide dedup key for injected
//! styles and as the attribute suffix correlating generated markup with
//! generated style rules.

use sha2::{Digest, Sha256};

/// Prefix for scope identifiers attached to generated markup and styles.
pub const SCOPE_ID_PREFIX: &str = "data-v-";

/// Reserved key carrying the scope identifier in the assembled component.
pub const SCOPE_ID_KEY: &str = "__scopeId";

/// Content hash of the component source: first 8 hex chars of SHA-256.
///
/// Pure function of the input bytes; used for the synthetic filename and
/// the scope identifier suffix.
pub fn content_hash(source: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..8].to_string()
}

/// Scope identifier for a content hash, e.g. `data-v-1a2b3c4d`.
pub fn scope_id(hash: &str) -> String {
    format!("{}{}", SCOPE_ID_PREFIX, hash)
}
