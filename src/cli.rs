//! Command-line entry point

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::{
    basket::{Basket, BasketError},
    config::{Cli, OutputFormat},
    discounts::ThresholdDiscount,
    pricing::{PricingError, price_basket},
    receipt::{Receipt, ReceiptError},
};

/// Errors surfaced to the user by a single invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// No item tokens were given.
    #[error("Usage: {program} <price1,qty1> <price2,qty2> ...")]
    Usage {
        /// Name the program was invoked as
        program: String,
    },

    /// A token was malformed.
    #[error(transparent)]
    Basket(#[from] BasketError),

    /// The basket could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The result could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Parse the configured tokens, price the basket and write the result to `out`.
///
/// Nothing is written to `out` unless every token parses and the basket prices.
///
/// # Errors
///
/// Returns a [`CliError`] for the first problem found, in argument order.
pub fn run(cli: &Cli, out: impl io::Write) -> Result<Receipt, CliError> {
    if cli.items.is_empty() {
        return Err(CliError::Usage {
            program: cli.program.clone(),
        });
    }

    let basket = Basket::parse(&cli.items)?;
    let receipt = price_basket(&basket, &ThresholdDiscount::standard())?;

    debug!(format = ?cli.format, "writing receipt");

    match cli.format {
        OutputFormat::Total => receipt.write_total(out)?,
        OutputFormat::Table => receipt.write_table(out)?,
        OutputFormat::Yaml => receipt.write_yaml(out)?,
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::items::ItemError;

    fn cli(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::load_from(std::iter::once("cart-total").chain(args.iter().copied()))
    }

    fn run_to_string(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        run(&cli(args)?, &mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_total_without_discount() -> TestResult {
        assert_eq!(run_to_string(&["10.00,2", "5.00,3"])?, "35.00\n");

        Ok(())
    }

    #[test]
    fn prints_discounted_total() -> TestResult {
        assert_eq!(run_to_string(&["500.00,3"])?, "1350.00\n");

        Ok(())
    }

    #[test]
    fn exact_threshold_is_not_discounted() -> TestResult {
        assert_eq!(run_to_string(&["1000.00,1"])?, "1000.00\n");

        Ok(())
    }

    #[test]
    fn just_over_threshold_rounds_to_cents() -> TestResult {
        assert_eq!(run_to_string(&["1000.01,1"])?, "900.01\n");

        Ok(())
    }

    #[test]
    fn no_items_is_a_usage_error() -> TestResult {
        let mut out = Vec::new();
        let result = run(&Cli::load_from(["./price_calculator"])?, &mut out);

        assert!(
            matches!(result, Err(CliError::Usage { ref program }) if program == "./price_calculator"),
            "expected usage error, got {result:?}"
        );
        assert_eq!(
            result.map_err(|err| err.to_string()).err().unwrap_or_default(),
            "Usage: ./price_calculator <price1,qty1> <price2,qty2> ..."
        );
        assert!(out.is_empty(), "nothing should be written on failure");

        Ok(())
    }

    #[test]
    fn missing_separator_is_a_format_error() -> TestResult {
        let mut out = Vec::new();
        let result = run(&cli(&["10.00,2", "10.00-2"])?, &mut out);

        assert!(
            matches!(
                result,
                Err(CliError::Basket(BasketError::Item {
                    index: 1,
                    source: ItemError::MissingSeparator(_)
                }))
            ),
            "expected format error, got {result:?}"
        );
        assert!(out.is_empty(), "no partial output on failure");

        Ok(())
    }

    #[test]
    fn unparseable_price_is_a_parse_error() -> TestResult {
        let result = run(&cli(&["abc,2"])?, Vec::new());

        assert!(
            matches!(
                result,
                Err(CliError::Basket(BasketError::Item {
                    source: ItemError::InvalidPrice { .. },
                    ..
                }))
            ),
            "expected price parse error, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn first_error_wins() -> TestResult {
        let result = run(&cli(&["abc,2", "10.00-2"])?, Vec::new());

        assert!(
            matches!(
                result,
                Err(CliError::Basket(BasketError::Item { index: 0, .. }))
            ),
            "the first bad token should be reported, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn returns_receipt() -> TestResult {
        let receipt = run(&cli(&["500.00,3"])?, Vec::new())?;

        assert!(receipt.is_discounted());
        assert_eq!(receipt.items(), 1);

        Ok(())
    }

    #[test]
    fn table_format_writes_breakdown() -> TestResult {
        let table = run_to_string(&["--format", "table", "500.00,3"])?;

        assert!(table.contains("1500.00"), "unexpected table:\n{table}");
        assert!(table.contains("150.00"), "unexpected table:\n{table}");
        assert!(table.contains("1350.00"), "unexpected table:\n{table}");

        Ok(())
    }

    #[test]
    fn yaml_format_writes_breakdown() -> TestResult {
        let yaml = run_to_string(&["--format", "yaml", "10.00,2", "5.00,3"])?;

        assert!(yaml.contains("items: 2"), "unexpected yaml:\n{yaml}");
        assert!(yaml.contains("35.00"), "unexpected yaml:\n{yaml}");

        Ok(())
    }
}
