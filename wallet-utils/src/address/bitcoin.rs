//! Bitcoin addresses

use std::str::FromStr;

use bitcoin::address::{NetworkUnchecked, Payload};
use bitcoin::hashes::Hash;
use bitcoin::{Address, Network, PubkeyHash, ScriptHash, WitnessProgram, WitnessVersion};

use super::{AddressCodec, AddressKind, AddressObject, Coin, NetworkKind};
use crate::error::{Error, Result};

/// Bitcoin codec: base58 P2PKH/P2SH and bech32/bech32m segwit addresses on
/// mainnet and testnet
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCodec;

impl AddressCodec for BitcoinCodec {
    fn coin(&self) -> Coin {
        Coin::Btc
    }

    fn parse(&self, address: &str) -> Result<AddressObject> {
        let unchecked = Address::<NetworkUnchecked>::from_str(address)
            .map_err(|e| Error::InvalidAddress(e.to_string()))?;

        let network = [NetworkKind::Mainnet, NetworkKind::Testnet]
            .into_iter()
            .find(|kind| unchecked.is_valid_for_network(to_network(*kind)))
            .ok_or_else(|| Error::InvalidAddress(format!("Unsupported network: {}", address)))?;

        let address = unchecked.assume_checked();
        let (kind, hash) = split_payload(address.payload())?;

        Ok(AddressObject {
            hash,
            kind,
            network,
        })
    }

    fn encode(&self, object: &AddressObject) -> Result<String> {
        object.validate()?;
        let address = Address::new(to_network(object.network), to_payload(object)?);
        Ok(address.to_string())
    }
}

fn to_network(kind: NetworkKind) -> Network {
    match kind {
        NetworkKind::Mainnet => Network::Bitcoin,
        NetworkKind::Testnet => Network::Testnet,
    }
}

/// Address kind and hash carried by a payload
fn split_payload(payload: &Payload) -> Result<(AddressKind, Vec<u8>)> {
    match payload {
        Payload::PubkeyHash(hash) => Ok((AddressKind::PubkeyHash, hash.to_byte_array().to_vec())),
        Payload::ScriptHash(hash) => Ok((AddressKind::ScriptHash, hash.to_byte_array().to_vec())),
        Payload::WitnessProgram(program) => {
            let bytes = program.program().as_bytes();
            let kind = match (program.version(), bytes.len()) {
                (WitnessVersion::V0, 20) => AddressKind::WitnessPubkeyHash,
                (WitnessVersion::V0, 32) => AddressKind::WitnessScriptHash,
                (WitnessVersion::V1, 32) => AddressKind::Taproot,
                (version, len) => {
                    return Err(Error::NotSupported(format!(
                        "Witness v{} program of {} bytes",
                        version.to_num(),
                        len
                    )))
                }
            };
            Ok((kind, bytes.to_vec()))
        }
        _ => Err(Error::NotSupported("Unknown address payload".to_string())),
    }
}

/// Payload for an address object whose hash length is already validated
fn to_payload(object: &AddressObject) -> Result<Payload> {
    let hash = object.hash.as_slice();
    let payload = match object.kind {
        AddressKind::PubkeyHash => Payload::PubkeyHash(
            PubkeyHash::from_slice(hash).map_err(|e| Error::InvalidAddress(e.to_string()))?,
        ),
        AddressKind::ScriptHash => Payload::ScriptHash(
            ScriptHash::from_slice(hash).map_err(|e| Error::InvalidAddress(e.to_string()))?,
        ),
        AddressKind::WitnessPubkeyHash | AddressKind::WitnessScriptHash => {
            witness_payload(WitnessVersion::V0, hash)?
        }
        AddressKind::Taproot => witness_payload(WitnessVersion::V1, hash)?,
    };
    Ok(payload)
}

fn witness_payload(version: WitnessVersion, program: &[u8]) -> Result<Payload> {
    let program = WitnessProgram::new(version, program.to_vec())
        .map_err(|e| Error::InvalidAddress(e.to_string()))?;
    Ok(Payload::WitnessProgram(program))
}
