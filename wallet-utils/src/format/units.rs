//! Display units and formatting options

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest number of fractional digits an amount can be rendered with
pub const MAX_DECIMALS: u32 = 18;

/// Supported display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Whole bitcoin
    Btc,
    /// Bits (100 satoshis)
    Bit,
    /// Satoshis
    Sat,
    /// Whole DeVault coin
    Dvt,
}

impl Unit {
    /// All units, in registry order
    pub const ALL: [Unit; 4] = [Unit::Btc, Unit::Bit, Unit::Sat, Unit::Dvt];

    /// Wire name of the unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Bit => "bit",
            Self::Sat => "sat",
            Self::Dvt => "dvt",
        }
    }

    /// Registry entry for the unit
    pub fn spec(&self) -> UnitSpec {
        match self {
            Self::Btc | Self::Dvt => UnitSpec {
                to_smallest_unit: 100_000_000,
                max_decimals: 6,
                min_decimals: 2,
            },
            Self::Bit => UnitSpec {
                to_smallest_unit: 100,
                max_decimals: 0,
                min_decimals: 0,
            },
            Self::Sat => UnitSpec {
                to_smallest_unit: 1,
                max_decimals: 0,
                min_decimals: 0,
            },
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

/// Conversion and precision rules of a display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    /// Smallest units per display unit
    pub to_smallest_unit: u64,
    /// Fractional digits the amount is rounded to
    pub max_decimals: u32,
    /// Fractional digits kept when trimming trailing zeros
    pub min_decimals: u32,
}

impl UnitSpec {
    /// Apply caller overrides, producing a new spec.
    ///
    /// When only `max_decimals` is overridden, `min_decimals` is lowered to
    /// fit under it. An explicit `min_decimals` above the effective maximum
    /// is rejected.
    pub fn with_overrides(&self, opts: &FormatOptions) -> Result<UnitSpec> {
        let max_decimals = opts.max_decimals.unwrap_or(self.max_decimals);
        if max_decimals > MAX_DECIMALS {
            return Err(Error::InvalidInput(format!(
                "maxDecimals {} exceeds {}",
                max_decimals, MAX_DECIMALS
            )));
        }

        let min_decimals = match opts.min_decimals {
            Some(min) if min > max_decimals => {
                return Err(Error::InvalidInput(format!(
                    "minDecimals {} exceeds maxDecimals {}",
                    min, max_decimals
                )));
            }
            Some(min) => min,
            None => self.min_decimals.min(max_decimals),
        };

        Ok(UnitSpec {
            to_smallest_unit: self.to_smallest_unit,
            max_decimals,
            min_decimals,
        })
    }
}

/// Caller-supplied formatting overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Overrides the unit's minimum fractional digits
    pub min_decimals: Option<u32>,
    /// Overrides the unit's maximum fractional digits
    pub max_decimals: Option<u32>,
    /// Inserted every three integer digits
    pub thousands_separator: String,
    /// Placed between the integer and fractional parts
    pub decimal_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            min_decimals: None,
            max_decimals: None,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        for unit in Unit::ALL {
            assert_eq!(unit.as_str().parse::<Unit>().unwrap(), unit);
        }
        assert_eq!("eth".parse::<Unit>(), Err(Error::UnknownUnit("eth".to_string())));
        assert!("BTC".parse::<Unit>().is_err());
    }

    #[test]
    fn test_registry_invariants() {
        for unit in Unit::ALL {
            let spec = unit.spec();
            assert!(spec.min_decimals <= spec.max_decimals);
            assert!(spec.to_smallest_unit > 0);
        }
    }

    #[test]
    fn test_overrides_leave_registry_untouched() {
        let opts = FormatOptions {
            min_decimals: Some(8),
            max_decimals: Some(8),
            ..Default::default()
        };
        let spec = Unit::Btc.spec().with_overrides(&opts).unwrap();
        assert_eq!(spec.max_decimals, 8);
        assert_eq!(spec.min_decimals, 8);
        assert_eq!(Unit::Btc.spec().max_decimals, 6);
        assert_eq!(Unit::Btc.spec().min_decimals, 2);
    }

    #[test]
    fn test_overrides_clamp_min_to_max() {
        let opts = FormatOptions {
            max_decimals: Some(1),
            ..Default::default()
        };
        let spec = Unit::Btc.spec().with_overrides(&opts).unwrap();
        assert_eq!(spec.min_decimals, 1);
    }

    #[test]
    fn test_overrides_reject_min_above_max() {
        let opts = FormatOptions {
            min_decimals: Some(4),
            max_decimals: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            Unit::Btc.spec().with_overrides(&opts),
            Err(Error::InvalidInput(_))
        ));

        let opts = FormatOptions {
            min_decimals: Some(3),
            ..Default::default()
        };
        assert!(Unit::Sat.spec().with_overrides(&opts).is_err());
    }

    #[test]
    fn test_overrides_reject_too_many_decimals() {
        let opts = FormatOptions {
            max_decimals: Some(MAX_DECIMALS + 1),
            ..Default::default()
        };
        assert!(Unit::Btc.spec().with_overrides(&opts).is_err());
    }

    #[test]
    fn test_options_from_json() {
        let opts: FormatOptions =
            serde_json::from_str(r#"{"maxDecimals": 8, "thousandsSeparator": " "}"#).unwrap();
        assert_eq!(opts.max_decimals, Some(8));
        assert_eq!(opts.min_decimals, None);
        assert_eq!(opts.thousands_separator, " ");
        assert_eq!(opts.decimal_separator, ".");
    }
}
