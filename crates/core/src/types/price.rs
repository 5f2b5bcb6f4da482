//! Prices as submitted.
//!
//! Clients send prices either as JSON numbers (`120`, `99.5`) or as strings
//! taken straight from a form input (`"120"`, `"99.50"`). A [`Price`] keeps the
//! JSON value it was given and writes it back unchanged, so records written by
//! earlier deployments (including ones like `"Rs. 20"`) load and save without
//! changing type. [`Price::amount`] reads the decimal amount when there is one.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::text::is_falsy;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty or only whitespace.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A price exactly as it appeared in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Value);

impl Price {
    /// Wrap any JSON value without validating it.
    #[must_use]
    pub const fn from_json(value: Value) -> Self {
        Self(value)
    }

    /// Parse a price from its textual form, keeping it as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] for blank input and
    /// [`PriceError::Invalid`] if the text is not a decimal number.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        Decimal::from_str(trimmed)
            .map(|_| Self(Value::String(trimmed.to_owned())))
            .map_err(|e| PriceError::Invalid(format!("{trimmed}: {e}")))
    }

    /// The JSON value as stored.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.0
    }

    /// The decimal amount, if the value is a number or a string holding one.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match &self.0 {
            Value::Number(n) => decimal_from_text(&n.to_string()),
            Value::String(s) => decimal_from_text(s.trim()),
            _ => None,
        }
    }

    /// Whether the value counts as "not provided": `null`, `false`, `""` or
    /// the number zero. The string `"0"` is provided.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        is_falsy(&self.0)
    }
}

pub(crate) fn decimal_from_text(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(Value::String(amount.to_string()))
    }
}
