//! Cryptographic operations
//!
//! This module provides the message hash used by wallet clients when signing
//! requests, the signature and public key codecs, and message verification
//! against secp256k1 public keys.

pub mod hash;
pub mod signature;

pub use hash::*;
pub use signature::*;
