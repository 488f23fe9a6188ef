//! Asset/share conversion at a tranche price.
//!
//! Prices are asset units per share scaled by [`PRICE_SCALAR`]. Every
//! conversion names its rounding direction; callers pick the direction that
//! favours the vault:
//!
//! | operation            | converts          | rounds |
//! |----------------------|-------------------|--------|
//! | `preview_deposit`    | assets -> shares  | down   |
//! | `preview_mint`       | shares -> assets  | up     |
//! | `preview_withdraw`   | assets -> shares  | up     |
//! | `preview_redeem`     | shares -> assets  | down   |

use crate::errors::WrapperError;

/// Fixed-point scale for tranche prices (7 decimals, 1.0 == 10_000_000)
pub const PRICE_SCALAR: i128 = 10_000_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// `a * b / d` rounded as requested, `None` on overflow or a non-positive divisor
fn mul_div(a: i128, b: i128, d: i128, rounding: Rounding) -> Option<i128> {
    if d <= 0 {
        return None;
    }
    let product = a.checked_mul(b)?;
    let quotient = product.checked_div(d)?;
    match rounding {
        Rounding::Up if product % d != 0 => quotient.checked_add(1),
        _ => Some(quotient),
    }
}

pub fn assets_to_shares(
    assets: i128,
    price: i128,
    rounding: Rounding,
) -> Result<i128, WrapperError> {
    mul_div(assets, PRICE_SCALAR, price, rounding).ok_or(WrapperError::ArithmeticOverflow)
}

pub fn shares_to_assets(
    shares: i128,
    price: i128,
    rounding: Rounding,
) -> Result<i128, WrapperError> {
    mul_div(shares, price, PRICE_SCALAR, rounding).ok_or(WrapperError::ArithmeticOverflow)
}
