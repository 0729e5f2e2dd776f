//! Content fingerprints for in-run deduplication.
//!
//! MD5 is fast and plenty for telling identical downloads apart within one
//! run. It is not collision-resistant and must not be used to vouch for
//! integrity.

use md5::{Digest, Md5};

/// Compute the MD5 of `bytes` and return the digest as lowercase hex.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
