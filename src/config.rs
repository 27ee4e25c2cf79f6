//! Command-line configuration

use std::{env, ffi::OsString};

use clap::{Parser, ValueEnum};

/// Program name used in messages when `argv[0]` is unavailable.
pub const DEFAULT_PROGRAM: &str = "cart-total";

/// How the priced basket is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the total, to two decimal places.
    #[default]
    Total,

    /// Subtotal, discount and total as a table.
    Table,

    /// Subtotal, discount and total as a YAML document.
    Yaml,
}

/// Cart total calculator configuration
#[derive(Debug, Parser)]
#[command(
    name = "cart-total",
    version,
    about = "Sums price,quantity pairs and takes 10% off subtotals over 1000.00",
    long_about = None
)]
pub struct Cli {
    /// Cart items as price,quantity pairs (use `--` before a negative price)
    #[arg(value_name = "PRICE,QTY", allow_hyphen_values = true)]
    pub items: Vec<String>,

    /// Output format (total, table, yaml)
    #[arg(long, value_enum, default_value_t = OutputFormat::Total)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Name the program was invoked as
    #[arg(skip)]
    pub program: String,
}

impl Cli {
    /// Load configuration from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed, or if help or version
    /// output was requested.
    pub fn load() -> Result<Self, clap::Error> {
        Self::load_from(env::args_os())
    }

    /// Load configuration from the given arguments, the first being the program name.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed, or if help or version
    /// output was requested.
    pub fn load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let program = args.first().map_or_else(
            || DEFAULT_PROGRAM.to_string(),
            |program| program.to_string_lossy().into_owned(),
        );

        let mut cli = Self::try_parse_from(args)?;
        cli.program = program;

        Ok(cli)
    }
}
