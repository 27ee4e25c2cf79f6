//! Items

use std::{num::ParseIntError, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

/// Separator between the price and quantity of an item token.
pub const SEPARATOR: char = ',';

/// Errors that can occur while parsing a single `price,quantity` token.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The token has no separator between price and quantity.
    #[error("Invalid format. Use: price,quantity")]
    MissingSeparator(String),

    /// The price segment is not a decimal number.
    #[error("Invalid price \"{text}\" in \"{token}\": {source}")]
    InvalidPrice {
        /// The full token being parsed
        token: String,

        /// The offending price text
        text: String,

        /// Underlying decimal parse error
        #[source]
        source: rust_decimal::Error,
    },

    /// The quantity segment is not an integer.
    #[error("Invalid quantity \"{text}\" in \"{token}\": {source}")]
    InvalidQuantity {
        /// The full token being parsed
        token: String,

        /// The offending quantity text
        text: String,

        /// Underlying integer parse error
        #[source]
        source: ParseIntError,
    },
}

/// A single cart line: a unit price and the number of units bought.
///
/// Neither field is range checked; zero and negative values are carried
/// through to the subtotal unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    price: Decimal,
    quantity: i64,
}

impl CartItem {
    /// Creates a new item with the given unit price and quantity
    pub fn new(price: Decimal, quantity: i64) -> Self {
        Self { price, quantity }
    }

    /// Parse an item from a `price,quantity` token.
    ///
    /// The token is split on its first comma. The price accepts plain or
    /// scientific decimal notation; the quantity must be a base-10 integer.
    ///
    /// # Errors
    ///
    /// - [`ItemError::MissingSeparator`]: the token contains no comma.
    /// - [`ItemError::InvalidPrice`]: the price segment is not a number.
    /// - [`ItemError::InvalidQuantity`]: the quantity segment is not an integer.
    pub fn parse(token: &str) -> Result<Self, ItemError> {
        let Some((price, quantity)) = token.split_once(SEPARATOR) else {
            return Err(ItemError::MissingSeparator(token.to_string()));
        };

        let item = CartItem {
            price: parse_price(token, price)?,
            quantity: parse_quantity(token, quantity)?,
        };

        trace!(token, price = %item.price, quantity = item.quantity, "parsed cart item");

        Ok(item)
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price multiplied by quantity, or `None` if the product overflows.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

impl FromStr for CartItem {
    type Err = ItemError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token)
    }
}

fn parse_price(token: &str, text: &str) -> Result<Decimal, ItemError> {
    let text = text.trim();

    Decimal::from_str(text)
        .or_else(|err| {
            if text.contains(['e', 'E']) {
                Decimal::from_scientific(text)
            } else {
                Err(err)
            }
        })
        .map_err(|source| ItemError::InvalidPrice {
            token: token.to_string(),
            text: text.to_string(),
            source,
        })
}

fn parse_quantity(token: &str, text: &str) -> Result<i64, ItemError> {
    let text = text.trim();

    text.parse::<i64>()
        .map_err(|source| ItemError::InvalidQuantity {
            token: token.to_string(),
            text: text.to_string(),
            source,
        })
}
