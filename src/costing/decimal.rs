//! Checked decimal arithmetic.
//!
//! All monetary and percentage math in the engine routes through these
//! wrappers so that chained multiplications (cost x (1+spice) x (1+Q)) never
//! pick up binary floating-point drift, and so that a zero denominator is a
//! `DivisionByZero` error instead of infinity or NaN.

use rust_decimal::Decimal;

use crate::error::{CostError, Result};

pub fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(CostError::Overflow)
}

pub fn sub(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or(CostError::Overflow)
}

pub fn mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or(CostError::Overflow)
}

pub fn div(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(CostError::DivisionByZero);
    }
    a.checked_div(b).ok_or(CostError::Overflow)
}

/// Raise to a non-negative integer power by repeated checked multiplication.
pub fn pow(base: Decimal, exp: u32) -> Result<Decimal> {
    let mut acc = Decimal::ONE;
    for _ in 0..exp {
        acc = mul(acc, base)?;
    }
    Ok(acc)
}
