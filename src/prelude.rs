//! Cart Total prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError},
    cli::{CliError, run},
    config::{Cli, OutputFormat},
    discounts::{DiscountError, ThresholdDiscount},
    items::{CartItem, ItemError},
    pricing::{PricingError, price_basket, round_money},
    receipt::{Receipt, ReceiptError},
};
