//! Message hashing

use sha2::{Digest as _, Sha256};

use crate::error::{Error, Result};

/// A 32-byte double-SHA256 digest
pub type Digest = [u8; 32];

/// Compute SHA256(SHA256(data)).
#[inline]
pub fn sha256d(data: &[u8]) -> Digest {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Hash a message the way wallet clients do before signing it.
///
/// The double-SHA256 digest is byte-reversed unless `no_reverse` is set, so it
/// reads in the same orientation as transaction ids. Message verification uses
/// the un-reversed digest.
pub fn hash_message(text: impl AsRef<[u8]>, no_reverse: bool) -> Result<Digest> {
    let text = text.as_ref();
    if text.is_empty() {
        return Err(Error::InvalidInput("message text must not be empty".to_string()));
    }

    let mut digest = sha256d(text);
    if !no_reverse {
        digest.reverse();
    }

    Ok(digest)
}
