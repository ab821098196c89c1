//! Exact monetary value with embedded currency.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// ISO-4217 style currency code: three ASCII letters, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of minor units in one major unit, as declared by a provider.
///
/// Paystack bills in kobo (100 per naira); Flutterwave bills in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinorUnitFactor(u32);

impl MinorUnitFactor {
    /// Amounts are already in major units.
    pub const MAJOR: MinorUnitFactor = MinorUnitFactor(1);
    /// Cents, kobo, pesewas and friends.
    pub const HUNDREDTHS: MinorUnitFactor = MinorUnitFactor(100);

    pub fn new(factor: u32) -> Result<Self, DomainError> {
        if factor == 0 {
            return Err(DomainError::InvalidFactor);
        }
        Ok(Self(factor))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

/// Monetary amount in major units with its currency.
///
/// The amount is a `Decimal`, so unit conversions never pick up
/// floating-point error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money value in major units.
    pub fn new(amount: Decimal, currency: impl AsRef<str>) -> Result<Self, DomainError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self {
            amount: amount.normalize(),
            currency: CurrencyCode::new(currency)?,
        })
    }

    /// Builds a major-unit Money from an amount expressed in minor units.
    pub fn from_minor_units(
        minor: Decimal,
        factor: MinorUnitFactor,
        currency: impl AsRef<str>,
    ) -> Result<Self, DomainError> {
        let amount = minor
            .checked_div(factor.as_decimal())
            .ok_or_else(|| DomainError::Overflow {
                amount: minor.to_string(),
                factor: factor.get(),
            })?;
        Self::new(amount, currency)
    }

    /// Returns the amount scaled into minor units.
    pub fn to_minor_units(&self, factor: MinorUnitFactor) -> Result<Decimal, DomainError> {
        self.amount
            .checked_mul(factor.as_decimal())
            .map(|d| d.normalize())
            .ok_or_else(|| DomainError::Overflow {
                amount: self.amount.to_string(),
                factor: factor.get(),
            })
    }

    /// Like [`Money::to_minor_units`], but fails when the result has a fractional part.
    pub fn to_whole_minor_units(&self, factor: MinorUnitFactor) -> Result<Decimal, DomainError> {
        let minor = self.to_minor_units(factor)?;
        if !minor.fract().is_zero() {
            return Err(DomainError::FractionalMinorUnits(format!(
                "{} {}",
                self.amount, self.currency
            )));
        }
        Ok(minor)
    }

    /// Returns the amount in major units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Writes a decimal as a JSON number, digit for digit.
///
/// Relies on serde_json's `arbitrary_precision`, so the number keeps the
/// decimal's text and never passes through `f64`.
pub fn decimal_to_json(amount: Decimal) -> Result<serde_json::Value, DomainError> {
    let text = amount.normalize().to_string();
    serde_json::Number::from_str(&text)
        .map(serde_json::Value::Number)
        .map_err(|_| DomainError::UnrepresentableAmount(text))
}

/// Reads a decimal from a JSON number or numeric string via its text form.
pub fn decimal_from_json(value: &serde_json::Value) -> Option<Decimal> {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .map(|d| d.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_creation() {
        let money = Money::new(dec!(100.50), "ngn").unwrap();
        assert_eq!(money.amount(), dec!(100.5));
        assert_eq!(money.currency().as_str(), "NGN");
    }

    #[test]
    fn test_negative_money_fails() {
        let result = Money::new(dec!(-1), "NGN");
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }

    #[test]
    fn test_invalid_currency_fails() {
        assert!(matches!(
            Money::new(dec!(1), "NAIRA"),
            Err(DomainError::InvalidCurrency(_))
        ));
        assert!(matches!(
            Money::new(dec!(1), "N1N"),
            Err(DomainError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_zero_factor_rejected() {
        assert!(matches!(
            MinorUnitFactor::new(0),
            Err(DomainError::InvalidFactor)
        ));
    }

    #[test]
    fn test_to_minor_units() {
        let money = Money::new(dec!(100), "NGN").unwrap();
        assert_eq!(
            money.to_minor_units(MinorUnitFactor::HUNDREDTHS).unwrap(),
            dec!(10000)
        );
        assert_eq!(
            money.to_minor_units(MinorUnitFactor::MAJOR).unwrap(),
            dec!(100)
        );
    }

    #[test]
    fn test_minor_unit_round_trip_is_exact() {
        let amounts = [
            dec!(0.01),
            dec!(0.1),
            dec!(1),
            dec!(19.99),
            dec!(100),
            dec!(123456789.87),
            dec!(0.333333333333),
        ];
        let factors = [
            MinorUnitFactor::MAJOR,
            MinorUnitFactor::HUNDREDTHS,
            MinorUnitFactor::new(1000).unwrap(),
        ];

        for amount in amounts {
            for factor in factors {
                let money = Money::new(amount, "NGN").unwrap();
                let minor = money.to_minor_units(factor).unwrap();
                let back = Money::from_minor_units(minor, factor, "NGN").unwrap();
                assert_eq!(back, money, "{} with factor {}", amount, factor.get());
            }
        }
    }

    #[test]
    fn test_fractional_minor_units_rejected() {
        let money = Money::new(dec!(100.555), "NGN").unwrap();
        assert!(matches!(
            money.to_whole_minor_units(MinorUnitFactor::HUNDREDTHS),
            Err(DomainError::FractionalMinorUnits(_))
        ));
        assert_eq!(
            money.to_whole_minor_units(MinorUnitFactor::MAJOR).ok(),
            None
        );
    }

    #[test]
    fn test_overflow_reported() {
        let money = Money::new(Decimal::MAX, "NGN").unwrap();
        assert!(matches!(
            money.to_minor_units(MinorUnitFactor::HUNDREDTHS),
            Err(DomainError::Overflow { .. })
        ));
    }

    #[test]
    fn test_decimal_to_json() {
        assert_eq!(decimal_to_json(dec!(10000)).unwrap(), serde_json::json!(10000));
        assert_eq!(decimal_to_json(dec!(200.00)).unwrap(), serde_json::json!(200));
        assert_eq!(decimal_to_json(dec!(200.5)).unwrap().to_string(), "200.5");
    }

    #[test]
    fn test_decimal_to_json_keeps_every_digit() {
        let value = decimal_to_json(dec!(1234567890.123456789)).unwrap();
        assert_eq!(value.to_string(), "1234567890.123456789");
        assert_eq!(decimal_from_json(&value), Some(dec!(1234567890.123456789)));
    }

    #[test]
    fn test_decimal_from_json() {
        assert_eq!(
            decimal_from_json(&serde_json::json!(10000)),
            Some(dec!(10000))
        );
        assert_eq!(
            decimal_from_json(&serde_json::json!(0.1)),
            Some(dec!(0.1))
        );
        assert_eq!(
            decimal_from_json(&serde_json::json!("250.75")),
            Some(dec!(250.75))
        );
        assert_eq!(decimal_from_json(&serde_json::json!(null)), None);
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(10.50), "NGN").unwrap();
        assert_eq!(money.to_string(), "10.5 NGN");
    }
}
