//! Checked fixed-point helpers shared by the deposit and withdraw paths.

/// Fixed-point scale for tranche prices (7 decimals, 1.0 == 10_000_000)
pub const PRICE_SCALAR: i128 = 10_000_000;

/// `floor(a * b / d)`, `None` on overflow or a non-positive divisor
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Option<i128> {
    if d <= 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(d)
}

/// `ceil(a * b / d)` for non-negative operands, `None` on overflow or a non-positive divisor
pub fn mul_div_ceil(a: i128, b: i128, d: i128) -> Option<i128> {
    if d <= 0 {
        return None;
    }
    let product = a.checked_mul(b)?;
    let quotient = product.checked_div(d)?;
    if product % d == 0 {
        Some(quotient)
    } else {
        quotient.checked_add(1)
    }
}
