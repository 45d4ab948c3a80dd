use crate::types::errors::NumericError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

pub const MAX_INT32: i64 = i32::MAX as i64;

/// Convergents within `value × 10^-20` of the input are accepted as exact.
///
/// This sits just above the rounding noise of a 28-digit decimal reciprocal, so in
/// practice the expansion ends either on an exact remainder, on this tolerance, or
/// on the 32-bit bound.
pub const APPROXIMATION_TOLERANCE_SCALE: u32 = 20;

/// Finds `n / d` closest to `value` with both terms in `1..=i32::MAX`, by
/// expanding `value` as a continued fraction.
///
/// The convergent recurrence is `h = a·h₁ + h₂`, `k = a·k₁ + k₂` seeded with
/// `(0, 1)` and `(1, 0)`. Expansion stops when the remainder is exactly zero, when
/// the convergent is within tolerance, or when the next convergent would leave
/// the 32-bit range, in which case the last one that fit is returned.
///
/// # Errors
/// `NoApproximation` when `value` is not strictly positive or no convergent fits,
/// e.g. values above `i32::MAX` or below `1 / i32::MAX`.
pub fn best_rational_approximation(value: Decimal) -> Result<(i32, i32), NumericError> {
    if value <= Decimal::ZERO {
        return Err(NumericError::NoApproximation)
    }

    let max_int = Decimal::from(MAX_INT32);
    let tolerance = value.checked_mul(Decimal::new(1, APPROXIMATION_TOLERANCE_SCALE))
        .unwrap_or(Decimal::ZERO);

    let (mut h_previous, mut k_previous) = (0i64, 1i64);
    let (mut h_current, mut k_current) = (1i64, 0i64);
    let mut remainder = value;

    loop {
        if remainder > max_int {
            debug!("Remainder of [{value}] left the 32-bit range, keeping [{h_current}/{k_current}]");
            break;
        }

        let floor = remainder.floor();
        let fraction = remainder - floor;
        let term = floor.to_i64().ok_or(NumericError::Overflow)?;

        let h_next = term * h_current + h_previous;
        let k_next = term * k_current + k_previous;

        if h_next > MAX_INT32 || k_next > MAX_INT32 {
            debug!("Next convergent of [{value}] overflows 32 bits, keeping [{h_current}/{k_current}]");
            break;
        }

        (h_previous, k_previous) = (h_current, k_current);
        (h_current, k_current) = (h_next, k_next);

        if fraction.is_zero() || within_tolerance(value, h_current, k_current, tolerance) {
            break;
        }

        match Decimal::ONE.checked_div(fraction) {
            Some(next) => remainder = next,
            None => break
        }
    }

    if h_current == 0 || k_current == 0 {
        return Err(NumericError::NoApproximation)
    }

    let n = i32::try_from(h_current).map_err(|_| NumericError::Overflow)?;
    let d = i32::try_from(k_current).map_err(|_| NumericError::Overflow)?;

    Ok((n, d))
}

fn within_tolerance(value: Decimal, h: i64, k: i64, tolerance: Decimal) -> bool {
    if k == 0 {
        return false;
    }

    // |h/k - value| <= tolerance  <=>  |h - value·k| <= tolerance·k
    let scaled = value.checked_mul(Decimal::from(k));
    let bound = tolerance.checked_mul(Decimal::from(k));

    match (scaled, bound) {
        (Some(scaled), Some(bound)) => (Decimal::from(h) - scaled).abs() <= bound,
        _ => false
    }
}
