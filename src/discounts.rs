//! Discounts
//!
//! Spend-threshold discount: once a basket's subtotal is strictly greater than
//! the threshold, a flat percentage of the whole subtotal is taken off.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The discount or discounted total could not be represented.
    #[error("Discount calculation overflowed")]
    Overflow,
}

/// A percentage discount applied to the whole subtotal above a spend threshold.
#[derive(Debug, Copy, Clone)]
pub struct ThresholdDiscount {
    threshold: Decimal,
    rate: Percentage,
}

impl ThresholdDiscount {
    /// Create a discount of `rate` for subtotals strictly above `threshold`.
    pub fn new(threshold: Decimal, rate: Percentage) -> Self {
        Self { threshold, rate }
    }

    /// 10% off subtotals over 1000.00.
    pub fn standard() -> Self {
        Self::new(Decimal::new(1000_00, 2), Percentage::from(Decimal::new(10, 2)))
    }

    /// Subtotal that must be exceeded before the discount applies.
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Fraction of the subtotal taken off, as a decimal (0.10 for 10%).
    pub fn rate(&self) -> Decimal {
        // decimal_percentage doesn't expose the underlying Decimal
        self.rate * Decimal::ONE
    }

    /// Whether a subtotal earns the discount. The comparison is strict.
    pub fn qualifies(&self, subtotal: Decimal) -> bool {
        subtotal > self.threshold
    }

    /// Amount taken off the given subtotal, zero when it doesn't qualify.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the discount cannot be represented.
    pub fn discount_on(&self, subtotal: Decimal) -> Result<Decimal, DiscountError> {
        if !self.qualifies(subtotal) {
            return Ok(Decimal::ZERO);
        }

        subtotal
            .checked_mul(self.rate())
            .ok_or(DiscountError::Overflow)
    }

    /// Subtotal less its discount.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the discount cannot be represented.
    pub fn apply(&self, subtotal: Decimal) -> Result<Decimal, DiscountError> {
        subtotal
            .checked_sub(self.discount_on(subtotal)?)
            .ok_or(DiscountError::Overflow)
    }
}

impl Default for ThresholdDiscount {
    fn default() -> Self {
        Self::standard()
    }
}
