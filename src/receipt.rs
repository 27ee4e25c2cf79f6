//! Receipt

use std::io;

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::pricing::round_money;

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The output stream could not be written to.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),

    /// The receipt could not be serialised.
    #[error("Failed to serialise receipt: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Number of items in the basket
    items: usize,

    /// Total cost before the discount
    subtotal: Decimal,

    /// Amount taken off the subtotal
    discount: Decimal,

    /// Amount payable after the discount
    total: Decimal,
}

/// Rounded, serialisable view of a receipt.
#[derive(Debug, Serialize)]
struct ReceiptSummary {
    items: usize,
    subtotal: String,
    discount: String,
    total: String,
}

impl Receipt {
    /// Create a new receipt with the given details.
    pub fn new(items: usize, subtotal: Decimal, discount: Decimal, total: Decimal) -> Self {
        Self {
            items,
            subtotal,
            discount,
            total,
        }
    }

    /// Number of items in the basket
    pub fn items(&self) -> usize {
        self.items
    }

    /// Total cost before the discount
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Amount taken off the subtotal
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Amount payable after the discount
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Whether any discount was applied.
    pub fn is_discounted(&self) -> bool {
        !self.discount.is_zero()
    }

    /// The total rounded and formatted with exactly two decimal places.
    pub fn formatted_total(&self) -> String {
        round_money(self.total).to_string()
    }

    /// Writes the formatted total on its own line.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if the output cannot be written.
    pub fn write_total(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "{}", self.formatted_total())?;

        Ok(())
    }

    /// Writes the subtotal, discount and total as a table.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if the output cannot be written.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let summary = self.summary();
        let mut builder = Builder::default();

        builder.push_record(["Items".to_string(), summary.items.to_string()]);
        builder.push_record(["Subtotal".to_string(), summary.subtotal]);
        builder.push_record(["Discount".to_string(), summary.discount]);
        builder.push_record(["Total".to_string(), summary.total]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }

    /// Writes the receipt as a YAML document.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if serialisation or writing fails.
    pub fn write_yaml(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let yaml = serde_norway::to_string(&self.summary())?;

        out.write_all(yaml.as_bytes())?;

        Ok(())
    }

    fn summary(&self) -> ReceiptSummary {
        ReceiptSummary {
            items: self.items,
            subtotal: round_money(self.subtotal).to_string(),
            discount: round_money(self.discount).to_string(),
            total: self.formatted_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn discounted() -> Receipt {
        Receipt::new(
            1,
            Decimal::new(1000_01, 2),
            Decimal::new(100_001, 3),
            Decimal::new(900_009, 3),
        )
    }

    #[test]
    fn accessors_return_values_from_constructor() {
        let receipt = discounted();

        assert_eq!(receipt.items(), 1);
        assert_eq!(receipt.subtotal(), Decimal::new(1000_01, 2));
        assert_eq!(receipt.discount(), Decimal::new(100_001, 3));
        assert_eq!(receipt.total(), Decimal::new(900_009, 3));
        assert!(receipt.is_discounted());
    }

    #[test]
    fn formatted_total_rounds_to_two_places() {
        assert_eq!(discounted().formatted_total(), "900.01");
    }

    #[test]
    fn write_total_is_a_single_line() -> TestResult {
        let receipt = Receipt::new(2, Decimal::from(35), Decimal::ZERO, Decimal::from(35));
        let mut out = Vec::new();

        receipt.write_total(&mut out)?;

        assert_eq!(String::from_utf8(out)?, "35.00\n");
        assert!(!receipt.is_discounted());

        Ok(())
    }

    #[test]
    fn write_table_lists_breakdown() -> TestResult {
        let mut out = Vec::new();

        discounted().write_table(&mut out)?;

        let table = String::from_utf8(out)?;

        for expected in ["Items", "Subtotal", "1000.01", "Discount", "100.00", "Total", "900.01"] {
            assert!(table.contains(expected), "table is missing {expected}:\n{table}");
        }

        Ok(())
    }

    #[test]
    fn write_yaml_serialises_rounded_amounts() -> TestResult {
        let mut out = Vec::new();

        discounted().write_yaml(&mut out)?;

        let yaml = String::from_utf8(out)?;

        assert!(yaml.contains("items: 1"), "unexpected yaml:\n{yaml}");
        assert!(yaml.contains("1000.01"), "unexpected yaml:\n{yaml}");
        assert!(yaml.contains("100.00"), "unexpected yaml:\n{yaml}");
        assert!(yaml.contains("900.01"), "unexpected yaml:\n{yaml}");

        Ok(())
    }
}
