//! Decimal money handling for prices, totals and relevance scores.
//!
//! The API speaks plain JSON numbers. Values are read through their shortest
//! decimal text form (so `10.1` arrives as exactly `10.1`, not the nearest
//! binary fraction) and kept as [`BigDecimal`]. Outgoing values are written back
//! as JSON numbers.
//!
//! Use with `#[serde(with = "money")]` for required fields and
//! `#[serde(default, with = "money::optional")]` for optional ones.

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Decimal places shown for monetary amounts.
const MONEY_SCALE: i64 = 2;

/// Decimal places shown for relevance scores.
const SCORE_SCALE: i64 = 3;

/// Numeric value as it may appear on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireDecimal {
    Number(serde_json::Number),
    Text(String),
}

impl WireDecimal {
    fn into_decimal(self) -> Result<BigDecimal, String> {
        let text = match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
        };
        BigDecimal::from_str(text.trim()).map_err(|e| format!("invalid decimal `{text}`: {e}"))
    }
}

/// Deserializes a required decimal from a JSON number or numeric string.
///
/// # Errors
///
/// Fails if the value is neither a number nor a parseable numeric string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    WireDecimal::deserialize(deserializer)?
        .into_decimal()
        .map_err(serde::de::Error::custom)
}

/// Serializes a decimal as a JSON number.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(value.to_f64().unwrap_or_default())
}

/// Serde helpers for optional decimal fields (`null` or absent → `None`).
pub mod optional {
    use super::WireDecimal;
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserializes an optional decimal.
    ///
    /// # Errors
    ///
    /// Fails if a present value is not numeric.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<WireDecimal>::deserialize(deserializer)?
            .map(WireDecimal::into_decimal)
            .transpose()
            .map_err(serde::de::Error::custom)
    }

    /// Serializes an optional decimal as a JSON number or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Formats an amount as dollars with two decimals, rounding half-up.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use zstorefront::domain::money::format_money;
///
/// assert_eq!(format_money(&BigDecimal::from_str("26.5").unwrap()), "$26.50");
/// ```
#[must_use]
pub fn format_money(amount: &BigDecimal) -> String {
    format!("${}", amount.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp))
}

/// Formats a relevance score with three decimals.
#[must_use]
pub fn format_score(score: &BigDecimal) -> String {
    score.with_scale_round(SCORE_SCALE, RoundingMode::HalfUp).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize)]
    struct Priced {
        #[serde(with = "super")]
        price: BigDecimal,
        #[serde(default, with = "super::optional")]
        score: Option<BigDecimal>,
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn json_numbers_keep_their_decimal_text() {
        let priced: Priced = serde_json::from_str(r#"{"price": 10.1, "score": 0.8125}"#).unwrap();
        assert_eq!(priced.price, dec("10.1"));
        assert_eq!(priced.score, Some(dec("0.8125")));
    }

    #[test]
    fn numeric_strings_and_missing_optionals_are_accepted() {
        let priced: Priced = serde_json::from_str(r#"{"price": "5.50"}"#).unwrap();
        assert_eq!(priced.price, dec("5.5"));
        assert_eq!(priced.score, None);

        let priced: Priced = serde_json::from_str(r#"{"price": 3, "score": null}"#).unwrap();
        assert_eq!(priced.price, dec("3"));
        assert_eq!(priced.score, None);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "ten"}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price": true}"#).is_err());
    }

    #[test]
    fn prices_serialize_as_numbers() {
        let priced = Priced { price: dec("10.5"), score: None };
        assert_eq!(serde_json::to_string(&priced).unwrap(), r#"{"price":10.5,"score":null}"#);
    }

    #[test]
    fn money_rounds_half_up_to_cents() {
        assert_eq!(format_money(&dec("20")), "$20.00");
        assert_eq!(format_money(&dec("0.125")), "$0.13");
        assert_eq!(format_score(&dec("0.81249")), "0.812");
    }
}
