//! Raw construction records and the loose numeric coercion applied to
//! field updates.
//!
//! Reading records from disk is the job of an external collaborator; this
//! module only defines the record shapes and how untrusted field values
//! are normalised.
use crate::producer::ProducerID;
use crate::province::ProvinceID;
use serde::Deserialize;

/// A field value supplied by an external data source.
///
/// Source documents cannot be trusted to contain well-formed numbers, so
/// setters accept either a number or arbitrary text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric field
    Number(f64),
    /// A field holding arbitrary text
    Text(String),
}

impl RawValue {
    /// Coerce this value to a whole number.
    ///
    /// Numbers truncate toward zero. Text is read as an optional sign
    /// followed by leading decimal digits, ignoring leading whitespace and
    /// anything after the digits. A value with no leading digits coerces
    /// to NaN.
    pub fn coerce_integer(&self) -> f64 {
        match self {
            RawValue::Number(n) => n.trunc(),
            RawValue::Text(s) => parse_leading_integer(s),
        }
    }

    /// Like [`RawValue::coerce_integer`], but a NaN result becomes zero.
    pub fn coerce_integer_or_zero(&self) -> f64 {
        let value = self.coerce_integer();
        if value.is_nan() { 0.0 } else { value }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Parse an optional sign followed by leading decimal digits.
///
/// Returns NaN if no digits are found.
fn parse_leading_integer(s: &str) -> f64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value = f64::NAN;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        let acc = if value.is_nan() { 0.0 } else { value };
        value = acc * 10.0 + f64::from(digit);
    }

    sign * value
}

/// Raw construction record for a single producer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProducerRecord {
    /// Unique name of the supply source (e.g. "hydro-north")
    pub name: ProducerID,
    /// Cost of producing one unit
    pub cost: f64,
    /// Quantity produced, defaulting to zero when absent
    #[serde(default)]
    pub production: f64,
}

/// Raw construction record for a province and its producers.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProvinceRecord {
    /// Unique name of the province (e.g. "borealia")
    pub name: ProvinceID,
    /// Quantity of local demand
    pub demand: f64,
    /// Market price per unit of satisfied demand
    pub price: f64,
    /// Producers operating in the province
    pub producers: Vec<ProducerRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case(RawValue::Number(12.0), 12.0)]
    #[case(RawValue::Number(12.9), 12.0)]
    #[case(RawValue::Number(-3.7), -3.0)]
    #[case(RawValue::Text("42".into()), 42.0)]
    #[case(RawValue::Text("  -7".into()), -7.0)]
    #[case(RawValue::Text("+5".into()), 5.0)]
    #[case(RawValue::Text("3.9".into()), 3.0)]
    #[case(RawValue::Text("12abc".into()), 12.0)]
    #[case(RawValue::Text("0".into()), 0.0)]
    fn test_coerce_integer(#[case] raw: RawValue, #[case] expected: f64) {
        assert_approx_eq!(f64, raw.coerce_integer(), expected);
        assert_approx_eq!(f64, raw.coerce_integer_or_zero(), expected);
    }

    #[rstest]
    #[case(RawValue::Text(String::new()))]
    #[case(RawValue::Text("production".into()))]
    #[case(RawValue::Text("--4".into()))]
    #[case(RawValue::Text("-".into()))]
    #[case(RawValue::Number(f64::NAN))]
    fn test_coerce_integer_non_numeric(#[case] raw: RawValue) {
        assert!(raw.coerce_integer().is_nan());
        assert_approx_eq!(f64, raw.coerce_integer_or_zero(), 0.0);
    }

    #[test]
    fn test_producer_record_default_production() {
        let record: ProducerRecord =
            toml::from_str("name = \"producer1\"\ncost = 10.0").unwrap();
        assert_eq!(record.name, "producer1".into());
        assert_approx_eq!(f64, record.cost, 10.0);
        assert_approx_eq!(f64, record.production, 0.0);
    }
}
