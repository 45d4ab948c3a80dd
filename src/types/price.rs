use crate::types::amount::split_plain_decimal;
use crate::types::approximation::best_rational_approximation;
use crate::types::errors::NumericError;
use crate::xdr::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price as supplied by a caller: an explicit ratio used verbatim, or a decimal
/// string that gets approximated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Ratio {
        n: i32,
        d: i32
    },
    Decimal(String)
}

impl PriceInput {
    pub fn ratio(n: i32, d: i32) -> Self {
        PriceInput::Ratio { n, d }
    }

    pub fn decimal(value: impl Into<String>) -> Self {
        PriceInput::Decimal(value.into())
    }
}

/// Converts a caller price to its wire form. Both terms must end up strictly positive.
///
/// Decimal strings follow the same plain grammar as amounts and must be
/// representable without rounding.
pub fn to_xdr_price(price: &PriceInput) -> Result<Price, NumericError> {
    let (n, d) = match price {
        PriceInput::Ratio { n, d } => (*n, *d),
        PriceInput::Decimal(value) => {
            if value.starts_with('-') {
                return Err(NumericError::NonPositivePrice)
            }

            split_plain_decimal(value)?;

            let value = Decimal::from_str_exact(value).map_err(|error| {
                NumericError::InvalidFormat(format!("Price [{value}] is not an exact decimal number: {error}"))
            })?;

            if value <= Decimal::ZERO {
                return Err(NumericError::NonPositivePrice)
            }

            best_rational_approximation(value)?
        }
    };

    if n <= 0 || d <= 0 {
        return Err(NumericError::NonPositivePrice)
    }

    Ok(Price { n, d })
}

/// Renders `n / d` as a decimal string.
pub fn from_xdr_price(price: &Price) -> Result<String, NumericError> {
    let quotient = Decimal::from(price.n)
        .checked_div(Decimal::from(price.d))
        .ok_or(NumericError::DivisionByZero)?;

    Ok(quotient.normalize().to_string())
}
