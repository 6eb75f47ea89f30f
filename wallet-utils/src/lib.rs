//! Wallet Utils - trust-sensitive helpers for a multi-coin wallet service
//!
//! This library provides message signature verification against secp256k1
//! public keys, amount formatting for display, client version parsing, and
//! translation of addresses between coins that share key material. Every
//! operation is a pure function over its arguments.

pub mod error;
pub mod crypto;
pub mod format;
pub mod version;
pub mod address;
pub mod util;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use crypto::{hash_message, import_public_key, import_signature, verify_message, Digest, EncodedBytes};
pub use format::{
    format_amount, format_amount_in_btc, format_ratio, format_size, format_utxos, FormatOptions,
    Unit, UnitSpec, Utxo,
};
pub use version::{parse_app_version, parse_version, App, AppVersionInfo, VersionInfo};
pub use address::{detect_address_coin, translate_address, AddressObject, Coin};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
