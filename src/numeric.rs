//! Small numeric helpers.

use crate::error::{Error, Result};

/// `base ^ exp % modulus` by square-and-multiply over the bits of `exp`.
///
/// Negative bases are reduced into `[0, modulus)` first, so the result is
/// always the mathematical (non-negative) residue. Returns
/// [`Error::ZeroModulus`] when `modulus` is zero.
pub fn modular_exp(base: i64, exp: u32, modulus: u32) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::ZeroModulus);
    }

    let modulus = u64::from(modulus);
    let mut result: u64 = 1;
    let mut power = base.rem_euclid(modulus as i64) as u64;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * power % modulus;
        }
        power = power * power % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Reverse the inclusive range `[start, end]` of a slice in place.
///
/// # Panics
///
/// Panics if the range is not inside the slice.
pub fn reverse_range<T>(data: &mut [T], start: usize, end: usize) {
    data[start..=end].reverse();
}
