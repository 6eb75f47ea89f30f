//! Base58Check encoding

use crate::crypto::hash::sha256d;
use crate::error::{Error, Result};

const CHECKSUM_LEN: usize = 4;

/// Encode a payload with a 4-byte double-SHA256 checksum
pub fn encode_check(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, verifying and stripping the checksum
pub fn decode_check(encoded: &str) -> Result<Vec<u8>> {
    let mut data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| Error::InvalidAddress(format!("Invalid base58: {}", e)))?;

    if data.len() < CHECKSUM_LEN {
        return Err(Error::InvalidAddress("Base58 payload too short".to_string()));
    }

    let split = data.len() - CHECKSUM_LEN;
    let (payload, checksum) = data.split_at(split);
    if sha256d(payload)[..CHECKSUM_LEN] != *checksum {
        return Err(Error::InvalidAddress("Base58 checksum mismatch".to_string()));
    }

    data.truncate(split);
    Ok(data)
}
