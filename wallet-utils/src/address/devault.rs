//! DeVault addresses
//!
//! DeVault is a Bitcoin-ABC fork. Its default address form is CashAddr under
//! the `devault` prefix (`dvtest` on testnet). The legacy form is Base58Check
//! with the version table DeVault inherited unchanged from Bitcoin, so a legacy
//! DeVault string is byte-for-byte a legacy Bitcoin string. Only P2PKH and P2SH
//! exist.

use super::{base58, cashaddr, AddressCodec, AddressKind, AddressObject, Coin, NetworkKind};
use crate::error::{Error, Result};

/// Encoding parameters of one DeVault network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevaultParams {
    pub network: NetworkKind,
    pub cashaddr_prefix: &'static str,
    pub pubkey_hash_version: u8,
    pub script_hash_version: u8,
}

pub const MAINNET: DevaultParams = DevaultParams {
    network: NetworkKind::Mainnet,
    cashaddr_prefix: "devault",
    pubkey_hash_version: 0x00,
    script_hash_version: 0x05,
};

pub const TESTNET: DevaultParams = DevaultParams {
    network: NetworkKind::Testnet,
    cashaddr_prefix: "dvtest",
    pubkey_hash_version: 0x6f,
    script_hash_version: 0xc4,
};

static NETWORKS: [DevaultParams; 2] = [MAINNET, TESTNET];

impl DevaultParams {
    pub fn for_network(network: NetworkKind) -> &'static DevaultParams {
        match network {
            NetworkKind::Mainnet => &MAINNET,
            NetworkKind::Testnet => &TESTNET,
        }
    }

    fn legacy_version(&self, kind: AddressKind) -> Result<u8> {
        match kind {
            AddressKind::PubkeyHash => Ok(self.pubkey_hash_version),
            AddressKind::ScriptHash => Ok(self.script_hash_version),
            other => Err(unsupported(other)),
        }
    }
}

/// DeVault codec
#[derive(Debug, Clone, Copy, Default)]
pub struct DevaultCodec;

impl DevaultCodec {
    fn parse_cashaddr(&self, address: &str) -> Result<AddressObject> {
        // Case is checked over prefix and payload together.
        if has_mixed_case(address) {
            return Err(Error::InvalidAddress(format!("Mixed case address: {}", address)));
        }

        let candidates: Vec<(&DevaultParams, &str)> = match address.split_once(':') {
            Some((prefix, payload)) => NETWORKS
                .iter()
                .filter(|params| params.cashaddr_prefix.eq_ignore_ascii_case(prefix))
                .map(|params| (params, payload))
                .collect(),
            None => NETWORKS.iter().map(|params| (params, address)).collect(),
        };

        let mut last_error = Error::InvalidAddress(format!("Unknown cashaddr prefix: {}", address));
        for (params, payload) in candidates {
            match cashaddr::decode(params.cashaddr_prefix, payload) {
                Ok((address_type, hash)) => {
                    let kind = match address_type {
                        cashaddr::TYPE_PUBKEY_HASH => AddressKind::PubkeyHash,
                        cashaddr::TYPE_SCRIPT_HASH => AddressKind::ScriptHash,
                        other => {
                            return Err(Error::InvalidAddress(format!(
                                "Unknown cashaddr type {}",
                                other
                            )))
                        }
                    };
                    let object = AddressObject {
                        hash,
                        kind,
                        network: params.network,
                    };
                    object.validate()?;
                    return Ok(object);
                }
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }

    fn parse_legacy(&self, address: &str) -> Result<AddressObject> {
        let payload = base58::decode_check(address)?;
        let Some((&version, hash)) = payload.split_first() else {
            return Err(Error::InvalidAddress("Empty legacy address".to_string()));
        };

        let (network, kind) = NETWORKS
            .iter()
            .find_map(|params| {
                if version == params.pubkey_hash_version {
                    Some((params.network, AddressKind::PubkeyHash))
                } else if version == params.script_hash_version {
                    Some((params.network, AddressKind::ScriptHash))
                } else {
                    None
                }
            })
            .ok_or_else(|| Error::InvalidAddress(format!("Unknown version byte {:#04x}", version)))?;

        let object = AddressObject {
            hash: hash.to_vec(),
            kind,
            network,
        };
        object.validate()?;
        Ok(object)
    }
}

impl AddressCodec for DevaultCodec {
    fn coin(&self) -> Coin {
        Coin::Dvt
    }

    fn parse(&self, address: &str) -> Result<AddressObject> {
        self.parse_cashaddr(address)
            .or_else(|_| self.parse_legacy(address))
    }

    fn encode(&self, object: &AddressObject) -> Result<String> {
        object.validate()?;
        let address_type = match object.kind {
            AddressKind::PubkeyHash => cashaddr::TYPE_PUBKEY_HASH,
            AddressKind::ScriptHash => cashaddr::TYPE_SCRIPT_HASH,
            other => return Err(unsupported(other)),
        };
        let params = DevaultParams::for_network(object.network);
        cashaddr::encode(params.cashaddr_prefix, address_type, &object.hash)
    }

    fn encode_legacy(&self, object: &AddressObject) -> Result<String> {
        object.validate()?;
        let params = DevaultParams::for_network(object.network);
        let mut payload = Vec::with_capacity(object.hash.len() + 1);
        payload.push(params.legacy_version(object.kind)?);
        payload.extend_from_slice(&object.hash);
        Ok(base58::encode_check(&payload))
    }
}

fn has_mixed_case(address: &str) -> bool {
    address.bytes().any(|b| b.is_ascii_lowercase())
        && address.bytes().any(|b| b.is_ascii_uppercase())
}

fn unsupported(kind: AddressKind) -> Error {
    Error::NotSupported(format!("DeVault has no {:?} addresses", kind))
}
