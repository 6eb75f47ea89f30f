//! Tests for address coin detection and translation

use wallet_utils::address::*;
use wallet_utils::Error;

const BTC_P2PKH: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
const BTC_P2SH: &str = "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy";
const BTC_TESTNET_P2PKH: &str = "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn";
const BTC_TESTNET_P2SH: &str = "2N9hLwkSqr1cPQAPxbrGVUjxyjD11G2e1he";
const BTC_SEGWIT: &str = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";

// Same hashes as BTC_P2PKH / BTC_P2SH / BTC_TESTNET_P2PKH.
const DVT_CASHADDR_P2PKH: &str = "devault:qp3wjpa3tjlj042z2wv7hahsldgwhwy0rqr3ullxta";
const DVT_CASHADDR_P2SH: &str = "devault:pz689gnx6z7cnsfhq6jpxtx0k9hhcwulevjeedkwek";
const DVT_TESTNET_CASHADDR_P2PKH: &str = "dvtest:qqjr7yu573z4faxw8ltgvjwpntwys08fysw43gdysh";

#[test]
fn test_detect_address_coin() {
    for address in [BTC_P2PKH, BTC_P2SH, BTC_TESTNET_P2PKH, BTC_TESTNET_P2SH, BTC_SEGWIT] {
        assert_eq!(detect_address_coin(address), Some(Coin::Btc), "{}", address);
    }
    for address in [
        DVT_CASHADDR_P2PKH,
        DVT_CASHADDR_P2SH,
        DVT_TESTNET_CASHADDR_P2PKH,
        "qp3wjpa3tjlj042z2wv7hahsldgwhwy0rqr3ullxta",
        "DEVAULT:QP3WJPA3TJLJ042Z2WV7HAHSLDGWHWY0RQR3ULLXTA",
    ] {
        assert_eq!(detect_address_coin(address), Some(Coin::Dvt), "{}", address);
    }
}

#[test]
fn test_detect_shared_legacy_form_prefers_btc() {
    // DeVault legacy addresses use Bitcoin's version bytes.
    let (coin, object) = decode_address(BTC_P2PKH).unwrap();
    assert_eq!(coin, Coin::Btc);
    assert_eq!(Coin::Dvt.codec().parse(BTC_P2PKH).unwrap(), object);
}

#[test]
fn test_detect_malformed_address() {
    assert_eq!(detect_address_coin("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb"), None);
    assert_eq!(detect_address_coin("devault:qp3wjpa3tjlj042z2wv7hahsldgwhwy0rqr3ullxtb"), None);
    assert_eq!(detect_address_coin("hello"), None);
}

#[test]
fn test_detect_mixed_case_cashaddr() {
    assert_eq!(detect_address_coin("DEVAULT:qp3wjpa3tjlj042z2wv7hahsldgwhwy0rqr3ullxta"), None);
    assert_eq!(detect_address_coin("devault:QP3WJPA3TJLJ042Z2WV7HAHSLDGWHWY0RQR3ULLXTA"), None);
}

#[test]
fn test_translate_btc_to_dvt_uses_legacy_form() {
    for address in [BTC_P2PKH, BTC_P2SH, BTC_TESTNET_P2PKH, BTC_TESTNET_P2SH] {
        assert_eq!(translate_address(address, Coin::Dvt).unwrap(), address);
    }
}

#[test]
fn test_translate_dvt_to_btc() {
    assert_eq!(translate_address(DVT_CASHADDR_P2PKH, Coin::Btc).unwrap(), BTC_P2PKH);
    assert_eq!(translate_address(DVT_CASHADDR_P2SH, Coin::Btc).unwrap(), BTC_P2SH);
    assert_eq!(
        translate_address(DVT_TESTNET_CASHADDR_P2PKH, Coin::Btc).unwrap(),
        BTC_TESTNET_P2PKH
    );
}

#[test]
fn test_translate_to_btc_then_detect() {
    for address in [DVT_CASHADDR_P2PKH, DVT_CASHADDR_P2SH, DVT_TESTNET_CASHADDR_P2PKH, BTC_SEGWIT] {
        let translated = translate_address(address, Coin::Btc).unwrap();
        assert_eq!(detect_address_coin(&translated), Some(Coin::Btc), "{}", translated);
    }
}

#[test]
fn test_translate_to_dvt_detects_as_btc() {
    let translated = translate_address(DVT_CASHADDR_P2SH, Coin::Dvt).unwrap();
    assert_eq!(translated, BTC_P2SH);
    assert_eq!(detect_address_coin(&translated), Some(Coin::Btc));
}

#[test]
fn test_translate_round_trip() {
    for address in [BTC_P2PKH, BTC_P2SH, BTC_TESTNET_P2PKH, BTC_TESTNET_P2SH] {
        let dvt = translate_address(address, Coin::Dvt).unwrap();
        assert_eq!(translate_address(&dvt, Coin::Btc).unwrap(), address);
    }
}

#[test]
fn test_translate_cashaddr_comes_back_legacy() {
    let btc = translate_address(DVT_CASHADDR_P2PKH, Coin::Btc).unwrap();
    assert_eq!(translate_address(&btc, Coin::Dvt).unwrap(), BTC_P2PKH);
}

#[test]
fn test_translate_preserves_hash() {
    let (_, source) = decode_address(DVT_CASHADDR_P2SH).unwrap();
    let translated = translate_address(DVT_CASHADDR_P2SH, Coin::Btc).unwrap();
    let (coin, target) = decode_address(&translated).unwrap();
    assert_eq!(coin, Coin::Btc);
    assert_eq!(target, source);
}

#[test]
fn test_translate_to_same_coin() {
    assert_eq!(translate_address(BTC_SEGWIT, Coin::Btc).unwrap(), BTC_SEGWIT);
    assert_eq!(translate_address(DVT_CASHADDR_P2SH, Coin::Dvt).unwrap(), BTC_P2SH);
}

#[test]
fn test_translate_segwit_to_dvt_not_supported() {
    assert!(matches!(
        translate_address(BTC_SEGWIT, Coin::Dvt),
        Err(Error::NotSupported(_))
    ));
}

#[test]
fn test_translate_unrecognized_address() {
    assert!(matches!(
        translate_address("hello", Coin::Dvt),
        Err(Error::InvalidAddress(_))
    ));
}
