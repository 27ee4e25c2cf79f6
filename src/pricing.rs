//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::{Basket, BasketError},
    discounts::{DiscountError, ThresholdDiscount},
    receipt::Receipt,
};

/// Decimal places used when presenting money.
pub const MONEY_DP: u32 = 2;

/// Errors that can occur while pricing a basket.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Error calculating the basket subtotal.
    #[error(transparent)]
    Basket(#[from] BasketError),

    /// Error calculating the discount.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Price a basket: subtotal, discount and total.
///
/// The receipt keeps exact values; rounding happens only when it is displayed.
///
/// # Errors
///
/// - [`PricingError::Basket`]: the subtotal overflowed.
/// - [`PricingError::Discount`]: the discount or total overflowed.
pub fn price_basket(
    basket: &Basket,
    discount: &ThresholdDiscount,
) -> Result<Receipt, PricingError> {
    let subtotal = basket.subtotal()?;
    let savings = discount.discount_on(subtotal)?;
    let total = subtotal
        .checked_sub(savings)
        .ok_or(DiscountError::Overflow)?;

    debug!(items = basket.len(), %subtotal, discount = %savings, %total, "priced basket");

    Ok(Receipt::new(basket.len(), subtotal, savings, total))
}

/// Round a money value to two decimal places, half away from zero.
///
/// The result always carries exactly two decimal places and zero is never negative.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }

    rounded.rescale(MONEY_DP);

    rounded
}
