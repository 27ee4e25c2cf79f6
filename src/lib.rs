//! Cart Total
//!
//! Prices a cart given as `price,quantity` pairs: the line totals are summed in
//! order and, when the subtotal is over 1000.00, 10% is taken off the whole cart.

pub mod basket;
pub mod cli;
pub mod config;
pub mod discounts;
pub mod items;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod receipt;
