//! Basket

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::items::{CartItem, ItemError};

/// Errors related to basket construction or totals.
#[derive(Debug, Error)]
pub enum BasketError {
    /// A token could not be parsed into an item.
    #[error("{source}")]
    Item {
        /// Zero-based position of the offending token
        index: usize,

        /// Why the token was rejected
        #[source]
        source: ItemError,
    },

    /// The running subtotal no longer fits in a decimal.
    #[error("Subtotal overflowed at item {}", .index + 1)]
    Overflow {
        /// Zero-based position of the item that overflowed
        index: usize,
    },
}

/// Ordered collection of cart items, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<CartItem>,
}

impl Basket {
    /// Create a new, empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new basket with the given items.
    pub fn with_items(items: impl Into<Vec<CartItem>>) -> Self {
        Basket {
            items: items.into(),
        }
    }

    /// Parse a basket from `price,quantity` tokens.
    ///
    /// Tokens are parsed left to right and parsing stops at the first token
    /// that fails.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Item`] carrying the index of the first invalid token.
    pub fn parse<I, S>(tokens: I) -> Result<Self, BasketError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                CartItem::parse(token.as_ref()).map_err(|source| BasketError::Item { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(items = items.len(), "parsed basket");

        Ok(Basket { items })
    }

    /// Calculate the subtotal of the basket.
    ///
    /// Line totals are summed in basket order. An empty basket has a zero subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Overflow`] if a line total or the running sum overflows.
    pub fn subtotal(&self) -> Result<Decimal, BasketError> {
        self.items
            .iter()
            .enumerate()
            .try_fold(Decimal::ZERO, |acc, (index, item)| {
                item.line_total()
                    .and_then(|line| acc.checked_add(line))
                    .ok_or(BasketError::Overflow { index })
            })
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in basket order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
