//! Error types for the wallet-utils library

use thiserror::Error;

/// Custom error type for wallet-utils operations.
///
/// Every variant is a caller contract violation. Expected negative outcomes
/// (a signature that does not verify, an address no network accepts) are
/// reported as `false` or `None` by the operations themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown coin: {0}")]
    UnknownCoin(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// Result type for wallet-utils operations
pub type Result<T> = std::result::Result<T, Error>;
