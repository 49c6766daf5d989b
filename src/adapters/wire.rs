//! Lenient numeric wire values
//!
//! The provider APIs are inconsistent about number encoding: the same field
//! may arrive as a JSON number, a decimal string, or be missing entirely.

use serde::Deserialize;

/// A number that may be encoded as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    Integer(u64),
    Float(f64),
    Text(String),
    /// Anything else (bool, object, ...), treated as missing
    Other(serde_json::Value),
}

impl WireNumber {
    /// Value as f64, 0 when malformed
    pub fn as_f64(&self) -> f64 {
        let value = match self {
            WireNumber::Integer(n) => *n as f64,
            WireNumber::Float(f) => *f,
            WireNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            WireNumber::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Value as an unsigned integer amount, `None` when malformed or negative
    ///
    /// Decimal strings are parsed exactly so 18-decimal EVM balances above
    /// `u64::MAX` survive; fractional values are truncated.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            WireNumber::Integer(n) => Some(u128::from(*n)),
            WireNumber::Float(f) => float_to_u128(*f),
            WireNumber::Text(s) => {
                let s = s.trim();
                s.parse::<u128>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_u128))
            }
            WireNumber::Other(_) => None,
        }
    }
}

fn float_to_u128(f: f64) -> Option<u128> {
    (f.is_finite() && f >= 0.0).then(|| f as u128)
}

/// f64 view of an optional wire number, 0 when missing
pub fn number_or_zero(value: Option<&WireNumber>) -> f64 {
    value.map(WireNumber::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> WireNumber {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(parse("42").as_f64(), 42.0);
        assert_eq!(parse("0.5").as_f64(), 0.5);
        assert_eq!(parse("\"0.00001234\"").as_f64(), 0.00001234);
        assert_eq!(parse("\"n/a\"").as_f64(), 0.0);
        assert_eq!(parse("true").as_f64(), 0.0);
    }

    #[test]
    fn test_large_decimal_string_amount() {
        let amount = parse("\"1000000000000000000000000\"");
        assert_eq!(amount.as_u128(), Some(1_000_000_000_000_000_000_000_000));
    }

    #[test]
    fn test_invalid_amounts() {
        assert_eq!(parse("-5").as_u128(), None);
        assert_eq!(parse("\"abc\"").as_u128(), None);
        assert_eq!(parse("null").as_u128(), None);
        assert_eq!(parse("12.9").as_u128(), Some(12));
    }
}
