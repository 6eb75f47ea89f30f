//! Signature and public key codecs, and message verification
//!
//! Wallet clients sign the un-reversed double-SHA256 of a request body and
//! send the DER signature along with their public key, either as raw bytes
//! or hex text. Every malformed input resolves to "not verified" here; only
//! an empty message is reported as an error.

use secp256k1::{ecdsa, Message, PublicKey, Secp256k1};
use tracing::debug;

use super::hash::{hash_message, Digest};
use crate::error::Result;

/// A signature normalized to its 64-byte compact (r || s) form
pub type CompactSignature = [u8; 64];

/// Signature or public key material as received from a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedBytes<'a> {
    /// Already-binary input
    Bytes(&'a [u8]),
    /// Hex text
    Hex(&'a str),
}

impl<'a> EncodedBytes<'a> {
    /// Decode to raw bytes, or `None` if the hex text is malformed
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes.to_vec()),
            Self::Hex(text) => hex::decode(text).ok(),
        }
    }
}

impl<'a> From<&'a [u8]> for EncodedBytes<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for EncodedBytes<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for EncodedBytes<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for EncodedBytes<'a> {
    fn from(text: &'a str) -> Self {
        Self::Hex(text)
    }
}

impl<'a> From<&'a String> for EncodedBytes<'a> {
    fn from(text: &'a String) -> Self {
        Self::Hex(text)
    }
}

/// Import a DER signature into compact form.
///
/// DER is parsed leniently, following libsecp256k1's `parse_der_lax`, so
/// signatures produced by older clients with non-minimal integer encodings
/// are still accepted. Returns `None` for anything that cannot be parsed,
/// and for an `r` or `s` that is zero or not below the curve order (the lax
/// parser zeroes out-of-range scalars).
pub fn import_signature<'a>(raw: impl Into<EncodedBytes<'a>>) -> Option<CompactSignature> {
    let Some(bytes) = raw.into().to_bytes() else {
        debug!("Signature is not valid hex");
        return None;
    };

    match ecdsa::Signature::from_der_lax(&bytes) {
        Ok(signature) => {
            let compact = signature.serialize_compact();
            let (r, s) = compact.split_at(32);
            if is_zero(r) || is_zero(s) {
                debug!("Signature scalar out of range");
                return None;
            }
            Some(compact)
        }
        Err(e) => {
            debug!("Failed to import signature: {}", e);
            None
        }
    }
}

fn is_zero(scalar: &[u8]) -> bool {
    scalar.iter().all(|&b| b == 0)
}

/// Import a public key into the byte form the verifier expects.
///
/// Only the encoding is checked here; whether the bytes are a valid curve
/// point is decided at verification time.
pub fn import_public_key<'a>(raw: impl Into<EncodedBytes<'a>>) -> Option<Vec<u8>> {
    let bytes = raw.into().to_bytes();
    if bytes.is_none() {
        debug!("Public key is not valid hex");
    }
    bytes
}

/// Verify a compact signature over a digest.
///
/// Any rejection by the curve library, including an invalid public key
/// point or a high-S signature, is reported as `false`.
pub fn verify_digest(digest: &Digest, signature: &CompactSignature, public_key: &[u8]) -> bool {
    let message = match Message::from_digest_slice(digest) {
        Ok(message) => message,
        Err(e) => {
            debug!("Invalid message digest: {}", e);
            return false;
        }
    };

    let signature = match ecdsa::Signature::from_compact(signature) {
        Ok(signature) => signature,
        Err(e) => {
            debug!("Invalid compact signature: {}", e);
            return false;
        }
    };

    let public_key = match PublicKey::from_slice(public_key) {
        Ok(public_key) => public_key,
        Err(e) => {
            debug!("Invalid public key: {}", e);
            return false;
        }
    };

    let secp = Secp256k1::verification_only();
    match secp.verify_ecdsa(&message, &signature, &public_key) {
        Ok(()) => true,
        Err(e) => {
            debug!("Signature verification failed: {}", e);
            false
        }
    }
}

/// Check that `signature` over `text` verifies against `public_key`.
///
/// Returns `Ok(false)` for malformed signatures, malformed public keys and
/// signatures that simply do not match. Errors only if `text` is empty.
pub fn verify_message<'a, 'b>(
    text: impl AsRef<[u8]>,
    signature: impl Into<EncodedBytes<'a>>,
    public_key: impl Into<EncodedBytes<'b>>,
) -> Result<bool> {
    let hash = hash_message(text, true)?;

    let Some(signature) = import_signature(signature) else {
        return Ok(false);
    };

    let Some(public_key) = import_public_key(public_key) else {
        return Ok(false);
    };

    Ok(verify_digest(&hash, &signature, &public_key))
}
