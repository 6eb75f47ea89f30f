//! Address coin detection and cross-coin translation
//!
//! The same key material can be spent on more than one chain. An address is
//! decoded into an [`AddressObject`] (hash, kind and network) which another
//! coin's codec can re-encode without touching the hash.

pub mod base58;
pub mod bitcoin;
pub mod cashaddr;
pub mod devault;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};

pub use self::bitcoin::BitcoinCodec;
pub use self::devault::DevaultCodec;

/// Coins whose addresses can be detected and translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    /// Bitcoin
    Btc,
    /// DeVault
    Dvt,
}

impl Coin {
    /// Order in which detection tries each coin's codec
    pub const DETECTION_ORDER: [Coin; 2] = [Coin::Btc, Coin::Dvt];

    /// Wire name of the coin
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Dvt => "dvt",
        }
    }

    /// Address codec for the coin
    pub fn codec(&self) -> &'static dyn AddressCodec {
        match self {
            Self::Btc => &BitcoinCodec,
            Self::Dvt => &DevaultCodec,
        }
    }

    /// Whether translated addresses use the legacy string form
    pub fn translates_to_legacy(&self) -> bool {
        matches!(self, Self::Dvt)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Coin::DETECTION_ORDER
            .into_iter()
            .find(|coin| coin.as_str() == s)
            .ok_or_else(|| Error::UnknownCoin(s.to_string()))
    }
}

/// Address type, independent of the coin that encodes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// P2PKH, 20-byte hash
    PubkeyHash,
    /// P2SH, 20-byte hash
    ScriptHash,
    /// Segwit v0 key hash, 20 bytes
    WitnessPubkeyHash,
    /// Segwit v0 script hash, 32 bytes
    WitnessScriptHash,
    /// Segwit v1 output key, 32 bytes
    Taproot,
}

impl AddressKind {
    /// Expected length of the hash carried by this kind
    pub fn hash_len(&self) -> usize {
        match self {
            Self::PubkeyHash | Self::ScriptHash | Self::WitnessPubkeyHash => 20,
            Self::WitnessScriptHash | Self::Taproot => 32,
        }
    }
}

/// Main or test network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Mainnet,
    Testnet,
}

/// Decoded address, free of any coin-specific encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressObject {
    #[serde(with = "hex_bytes")]
    pub hash: Vec<u8>,
    pub kind: AddressKind,
    pub network: NetworkKind,
}

impl AddressObject {
    /// Check that the hash length matches the address kind
    pub fn validate(&self) -> Result<()> {
        if self.hash.len() != self.kind.hash_len() {
            return Err(Error::InvalidAddress(format!(
                "{:?} address needs a {}-byte hash, got {}",
                self.kind,
                self.kind.hash_len(),
                self.hash.len()
            )));
        }
        Ok(())
    }
}

/// Coin-specific address string encoding
pub trait AddressCodec: Send + Sync {
    /// Coin this codec encodes for
    fn coin(&self) -> Coin;

    /// Decode an address string valid for this coin
    fn parse(&self, address: &str) -> Result<AddressObject>;

    /// Encode in the coin's default string form
    fn encode(&self, object: &AddressObject) -> Result<String>;

    /// Encode in the coin's legacy string form
    fn encode_legacy(&self, object: &AddressObject) -> Result<String> {
        self.encode(object)
    }
}

/// Decode an address with the first coin, in detection order, that accepts it
pub fn decode_address(address: &str) -> Option<(Coin, AddressObject)> {
    Coin::DETECTION_ORDER.into_iter().find_map(|coin| {
        match coin.codec().parse(address) {
            Ok(object) => Some((coin, object)),
            Err(e) => {
                trace!("Address {} is not {}: {}", address, coin, e);
                None
            }
        }
    })
}

/// Detect which coin an address belongs to.
///
/// Returns `None` when no supported coin accepts the address.
pub fn detect_address_coin(address: &str) -> Option<Coin> {
    let coin = decode_address(address).map(|(coin, _)| coin);
    debug!("Detected coin {:?} for address {}", coin, address);
    coin
}

/// Re-encode an address for another coin, keeping its hash.
///
/// DeVault output uses the legacy form; other coins use their default form.
/// Fails if no coin accepts the address, or the target coin cannot encode
/// its kind.
pub fn translate_address(address: &str, target: Coin) -> Result<String> {
    let (source, object) = decode_address(address)
        .ok_or_else(|| Error::InvalidAddress(format!("Unrecognized address: {}", address)))?;

    let codec = target.codec();
    let translated = if target.translates_to_legacy() {
        codec.encode_legacy(&object)?
    } else {
        codec.encode(&object)?
    };

    debug!("Translated {} address {} to {} {}", source, address, target, translated);
    Ok(translated)
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex::decode(text).map_err(serde::de::Error::custom)
    }
}
