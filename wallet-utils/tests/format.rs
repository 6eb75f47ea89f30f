//! Tests for amount and size formatting

use wallet_utils::format::*;

#[test]
fn test_format_amount_defaults() {
    let opts = FormatOptions::default();
    assert_eq!(format_amount(123_456_789, Unit::Btc, &opts).unwrap(), "1.234568");
    assert_eq!(format_amount(100_000_000, Unit::Btc, &opts).unwrap(), "1.00");
    assert_eq!(format_amount(123_456_789, Unit::Bit, &opts).unwrap(), "1,234,568");
    assert_eq!(format_amount(123_456_789, Unit::Sat, &opts).unwrap(), "123,456,789");
}

#[test]
fn test_format_amount_by_unit_name() {
    let unit: Unit = "dvt".parse().unwrap();
    let amount = format_amount(250_000_000, unit, &FormatOptions::default()).unwrap();
    assert_eq!(amount, "2.50");
    assert!("doge".parse::<Unit>().is_err());
}

#[test]
fn test_format_amount_options_from_json() {
    let opts: FormatOptions = serde_json::from_str(
        r#"{"minDecimals": 8, "maxDecimals": 8, "thousandsSeparator": "'", "decimalSeparator": ","}"#,
    )
    .unwrap();
    assert_eq!(
        format_amount(123_456_789_000, Unit::Btc, &opts).unwrap(),
        "1'234,56789000"
    );
}

#[test]
fn test_format_amount_invalid_overrides() {
    let opts = FormatOptions {
        min_decimals: Some(7),
        max_decimals: Some(6),
        ..Default::default()
    };
    assert!(format_amount(1, Unit::Btc, &opts).is_err());
}

#[test]
fn test_format_utxos_summary() {
    let utxos: Vec<Utxo> = serde_json::from_str(
        r#"[{"satoshis": 100000000, "confirmations": 3}, {"satoshis": 5000}]"#,
    )
    .unwrap();
    let summary = format_utxos(&utxos);
    assert_eq!(summary, "1.00000000btc/3c, 0.00005000btc/u");
    assert!(summary.ends_with("/u"));
    assert_eq!(format_utxos(&[]), "none");
}

#[test]
fn test_format_ratio_and_size() {
    assert_eq!(format_ratio(0.0123), "1.2300%");
    assert_eq!(format_size(2_250), "2.2500kB");
}
