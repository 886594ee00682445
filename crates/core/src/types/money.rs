//! Type-safe money representation using decimal arithmetic.
//!
//! The backend serializes monetary amounts as decimal strings
//! (`{"amount": "12.50", "currencyCode": "USD"}`), so [`Money`] round-trips
//! through `rust_decimal`'s string serde rather than floats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Multiply by an integer quantity (e.g., a line item quantity).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl core::ops::Add for Money {
    type Output = Self;

    /// Add two amounts.
    ///
    /// Mixed-currency addition keeps the left operand's currency; the cart
    /// never mixes currencies because every line item is priced by the same
    /// backend.
    fn add(self, rhs: Self) -> Self {
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn usd(amount: f64) -> Money {
        Money::new(Decimal::from_f64(amount).unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_wire_round_trip() {
        let json = r#"{"amount":"12.50","currencyCode":"USD"}"#;
        let money: Money = serde_json::from_str(json).unwrap();
        assert_eq!(money.amount, Decimal::new(1250, 2));
        assert_eq!(money.currency_code, CurrencyCode::USD);

        let back = serde_json::to_string(&money).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_times_quantity() {
        let unit = usd(10.0);
        assert_eq!(unit.times(5).amount, Decimal::from(50));
    }

    #[test]
    fn test_add() {
        let total = usd(10.0) + usd(2.5);
        assert_eq!(total.amount, Decimal::new(125, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(19.99).display(), "$19.99");
        assert_eq!(
            Money::new(Decimal::from(5), CurrencyCode::EUR).display(),
            "€5.00"
        );
    }
}
