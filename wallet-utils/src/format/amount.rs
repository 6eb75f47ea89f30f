//! Amount, ratio and size formatting

use serde::{Deserialize, Serialize};

use super::units::{FormatOptions, Unit, UnitSpec};
use crate::error::Result;

/// An unspent output as shown in service logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Value in satoshis
    pub satoshis: u64,
    /// Confirmation count, absent while unconfirmed
    #[serde(default)]
    pub confirmations: Option<u64>,
}

/// Format an amount of smallest units in the given display unit.
///
/// The value is rounded half away from zero to the unit's `max_decimals`,
/// trailing zeros are trimmed down to `min_decimals`, and the integer part
/// is grouped in threes. Options override the unit's precision and the
/// separators for this call only.
pub fn format_amount(satoshis: u64, unit: Unit, opts: &FormatOptions) -> Result<String> {
    let spec = unit.spec().with_overrides(opts)?;
    Ok(render_amount(
        satoshis,
        &spec,
        &opts.thousands_separator,
        &opts.decimal_separator,
    ))
}

/// Format an amount as whole bitcoin with all eight decimals and a `btc` suffix
pub fn format_amount_in_btc(satoshis: u64) -> String {
    let spec = UnitSpec {
        max_decimals: 8,
        min_decimals: 8,
        ..Unit::Btc.spec()
    };
    let opts = FormatOptions::default();
    let amount = render_amount(
        satoshis,
        &spec,
        &opts.thousands_separator,
        &opts.decimal_separator,
    );
    format!("{}btc", amount)
}

/// Summarize outputs as `<amount>/<confirmations>c`, or `<amount>/u` when
/// unconfirmed, joined by `", "`. An empty list is `"none"`.
pub fn format_utxos(utxos: &[Utxo]) -> String {
    if utxos.is_empty() {
        return "none".to_string();
    }

    utxos
        .iter()
        .map(|utxo| {
            let amount = format_amount_in_btc(utxo.satoshis);
            match utxo.confirmations {
                Some(confirmations) if confirmations > 0 => {
                    format!("{}/{}c", amount, confirmations)
                }
                _ => format!("{}/u", amount),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a ratio as a percentage with four decimals
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.4}%", ratio * 100.0)
}

/// Format a byte count in kilobytes with four decimals
pub fn format_size(size: u64) -> String {
    format!("{:.4}kB", size as f64 / 1000.0)
}

fn render_amount(satoshis: u64, spec: &UnitSpec, thousands: &str, decimal: &str) -> String {
    let scale = 10u128.pow(spec.max_decimals);
    let factor = u128::from(spec.to_smallest_unit);

    // Round half up on the scaled value: (2 * n * scale + factor) / (2 * factor)
    let scaled = (2 * u128::from(satoshis) * scale + factor) / (2 * factor);
    let integer = (scaled / scale).to_string();

    let mut fraction = if spec.max_decimals > 0 {
        format!("{:0width$}", scaled % scale, width = spec.max_decimals as usize)
    } else {
        String::new()
    };
    while fraction.len() > spec.min_decimals as usize && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = group_thousands(&integer, thousands);
    if !fraction.is_empty() {
        out.push_str(decimal);
        out.push_str(&fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
