//! A set of utilities for working with the money amounts on hire records.

use crate::error::{Error, Result};
use rust_decimal::prelude::*;
use std::str::FromStr;

/// Create a number.
///
/// This is mostly a wrapper around `dec!` that makes it easier to swap out
/// salary/wage values project-wide without having to change each instance by
/// hand, but can also be used by callers of the core to create amounts more
/// seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}

/// Parse a money amount (salary, wages) typed in by a person. Amounts are
/// plain non-negative decimals, no signs, no exponents, no currency symbols.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    let dots = trimmed.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != trimmed.chars().count() {
        Err(Error::invalid_format(field, value))?;
    }
    // "12." and ".5" are accepted by the decimal input mask, so accept them
    // here too.
    let normalized = match (trimmed.starts_with('.'), trimmed.ends_with('.')) {
        (true, _) => format!("0{}", trimmed),
        (false, true) => format!("{}0", trimmed),
        _ => trimmed.to_string(),
    };
    Decimal::from_str(&normalized)
        .map_err(|_| Error::invalid_format(field, value))
}

/// Make sure an amount handed to us directly isn't negative.
pub fn check_amount(field: &str, amount: &Decimal) -> Result<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        Err(Error::invalid_format(field, amount.to_string()))?;
    }
    Ok(())
}

/// Parse a whole, non-negative count (vacancy numbers, hours, indices).
pub fn parse_count(field: &str, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        Err(Error::invalid_format(field, value))?;
    }
    trimmed.parse::<u32>()
        .map_err(|_| Error::invalid_format(field, value))
}
