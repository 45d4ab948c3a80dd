use crate::types::errors::NumericError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const AMOUNT_DECIMAL_PLACES: u32 = 7;
pub const AMOUNT_SCALE: i64 = 10i64.pow(AMOUNT_DECIMAL_PLACES);
/// The largest amount the wire format can carry, `i64::MAX / 10^7`.
pub const MAX_INT64_AMOUNT: &str = "922337203685.4775807";

/// A ledger amount stored as `decimal × 10^7` in a signed 64-bit integer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const MAX: Amount = Amount(i64::MAX);

    pub const fn from_raw(raw: i64) -> Self {
        Amount(raw)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Parses a decimal string into a scaled amount.
    ///
    /// Accepted input is an optional `+`, integer digits, and an optional `.`
    /// followed by fraction digits. At most 7 significant fraction digits are
    /// allowed (trailing zeros do not count). Negative values are rejected, zero
    /// only passes when `allow_zero` is set, and the scaled value must fit in an
    /// `i64`.
    pub fn parse(value: &str, allow_zero: bool) -> Result<Self, NumericError> {
        if value.is_empty() {
            return Err(NumericError::InvalidFormat("Value is an empty string".to_string()))
        }

        if value.starts_with('-') {
            return Err(NumericError::Negative)
        }

        let (integer, fraction) = split_plain_decimal(value)?;
        let fraction = fraction.trim_end_matches('0');

        if fraction.len() > AMOUNT_DECIMAL_PLACES as usize {
            return Err(NumericError::TooManyDecimalPlaces)
        }

        let integer = integer.trim_start_matches('0');
        let integer: i128 = if integer.is_empty() {
            0
        } else {
            integer.parse().map_err(|_| NumericError::Overflow)?
        };

        let padded = format!("{:0<width$}", fraction, width = AMOUNT_DECIMAL_PLACES as usize);
        let fraction: i128 = padded.parse().map_err(|error| {
            NumericError::InvalidFormat(format!("Value has an invalid fraction part: {:?}", error))
        })?;

        let scaled = integer.checked_mul(i128::from(AMOUNT_SCALE))
            .and_then(|v| v.checked_add(fraction))
            .ok_or(NumericError::Overflow)?;

        let scaled = i64::try_from(scaled).map_err(|_| NumericError::Overflow)?;

        if scaled == 0 && !allow_zero {
            return Err(NumericError::Zero)
        }

        Ok(Amount(scaled))
    }

    /// Exact decimal value, e.g. `101234567` becomes `10.1234567`.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, AMOUNT_DECIMAL_PLACES)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_decimal().normalize())
    }
}

/// Splits an unsigned plain decimal (`+`, digits, `.`, digits) into its integer
/// and fraction digits. Anything else, including exponents, separators and
/// whitespace, is rejected.
pub(crate) fn split_plain_decimal(value: &str) -> Result<(&str, &str), NumericError> {
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if integer.is_empty() && fraction.is_empty() {
        return Err(NumericError::InvalidFormat(format!("Value [{value}] has no digits")))
    }

    if !integer.bytes().chain(fraction.bytes()).all(|byte| byte.is_ascii_digit()) {
        return Err(NumericError::InvalidFormat(format!("Value [{value}] is not a decimal number")))
    }

    Ok((integer, fraction))
}

/// Whether `value` is an acceptable amount string. See [`Amount::parse`].
pub fn is_valid_amount(value: &str, allow_zero: bool) -> bool {
    Amount::parse(value, allow_zero).is_ok()
}

/// Scales a decimal string to its wire integer. Zero is accepted.
pub fn to_xdr_amount(value: &str) -> Result<i64, NumericError> {
    Amount::parse(value, true).map(Amount::raw)
}

/// Renders a wire integer as an exact decimal string.
pub fn from_xdr_amount(value: i64) -> String {
    Amount::from_raw(value).to_string()
}
