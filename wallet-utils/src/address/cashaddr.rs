//! CashAddr encoding
//!
//! `<prefix>:<base32 payload><40-bit BCH checksum>`, where the payload is a
//! version byte (address type and hash size) followed by the hash.

use std::iter;

use crate::error::{Error, Result};

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATORS: [u64; 5] = [
    0x98_f2bc_8e61,
    0x79_b76d_99e2,
    0xf3_3e5f_b3c4,
    0xae_2eab_e2a8,
    0x1e_4f43_e470,
];

const CHECKSUM_LEN: usize = 8;

/// Hash lengths indexed by the low three bits of the version byte
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Type bits of a P2PKH version byte
pub const TYPE_PUBKEY_HASH: u8 = 0;
/// Type bits of a P2SH version byte
pub const TYPE_SCRIPT_HASH: u8 = 1;

/// Encode a hash under `prefix` with the given address type
pub fn encode(prefix: &str, address_type: u8, hash: &[u8]) -> Result<String> {
    let size_bits = HASH_SIZES
        .iter()
        .position(|&size| size == hash.len())
        .ok_or_else(|| Error::InvalidAddress(format!("Unsupported hash length {}", hash.len())))?;

    let mut data = Vec::with_capacity(hash.len() + 1);
    data.push((address_type << 3) | size_bits as u8);
    data.extend_from_slice(hash);
    let payload = to_base32(&data);

    let checksum = polymod(
        prefix_values(prefix)
            .chain(payload.iter().copied())
            .chain([0u8; CHECKSUM_LEN]),
    );

    let mut out = String::with_capacity(prefix.len() + 1 + payload.len() + CHECKSUM_LEN);
    out.push_str(prefix);
    out.push(':');
    for &value in &payload {
        out.push(CHARSET[value as usize] as char);
    }
    for i in 0..CHECKSUM_LEN {
        let value = (checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f;
        out.push(CHARSET[value as usize] as char);
    }
    Ok(out)
}

/// Decode the part after the `:` of an address expected under `prefix`.
///
/// Returns the address type and hash. Mixed-case payloads are rejected.
pub fn decode(prefix: &str, payload: &str) -> Result<(u8, Vec<u8>)> {
    let has_lower = payload.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = payload.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Error::InvalidAddress("Mixed-case cashaddr".to_string()));
    }

    let values = payload
        .to_ascii_lowercase()
        .bytes()
        .map(|b| CHARSET.iter().position(|&c| c == b).map(|v| v as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| Error::InvalidAddress("Invalid cashaddr character".to_string()))?;

    if values.len() <= CHECKSUM_LEN {
        return Err(Error::InvalidAddress("Cashaddr payload too short".to_string()));
    }

    if polymod(prefix_values(prefix).chain(values.iter().copied())) != 0 {
        return Err(Error::InvalidAddress("Cashaddr checksum mismatch".to_string()));
    }

    let data = from_base32(&values[..values.len() - CHECKSUM_LEN])
        .ok_or_else(|| Error::InvalidAddress("Invalid cashaddr padding".to_string()))?;
    let (&version, hash) = data
        .split_first()
        .ok_or_else(|| Error::InvalidAddress("Empty cashaddr payload".to_string()))?;

    if version & 0x80 != 0 {
        return Err(Error::InvalidAddress("Reserved cashaddr version bit set".to_string()));
    }
    if hash.len() != HASH_SIZES[(version & 0x07) as usize] {
        return Err(Error::InvalidAddress("Cashaddr hash length mismatch".to_string()));
    }

    Ok((version >> 3, hash.to_vec()))
}

fn prefix_values(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|b| b & 0x1f).chain(iter::once(0))
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    let mut c: u64 = 1;
    for value in values {
        let c0 = c >> 35;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 >> i) & 1 == 1 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((data.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in data {
        acc = ((acc << 8) | u32::from(byte)) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

fn from_base32(values: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(values.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &value in values {
        acc = ((acc << 5) | u32::from(value)) & 0xfff;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    // Leftover padding must be short and zero
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return None;
    }
    Some(out)
}
