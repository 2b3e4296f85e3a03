//! Command line interface

use std::{io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use pricetag::prelude::*;

use crate::logging::LoggingConfig;

/// Errors surfaced by a command
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalogue could not be loaded or the currency is unknown
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Price could not be built or displayed
    #[error(transparent)]
    Price(#[from] PriceError),

    /// Checked conversion failed
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Writing the result failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "pricetag", about = "Price display and conversion", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print an amount with its full currency name and code
    Display(DisplayArgs),

    /// Multiply an amount by a conversion rate
    Convert(ConvertArgs),

    /// Multiply an exact decimal amount by a decimal rate
    ConvertDecimal(ConvertDecimalArgs),
}

#[derive(Debug, Args)]
struct DisplayArgs {
    /// Amount to display
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,

    /// Currency code, looked up in the catalogue then the ISO table
    #[arg(long)]
    currency: String,

    /// YAML currency catalogue
    #[arg(long, env = "PRICETAG_CATALOGUE")]
    catalogue: Option<PathBuf>,

    /// Reject NaN and infinite amounts
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct ConvertArgs {
    /// Amount to convert
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,

    /// Conversion rate
    #[arg(long, allow_hyphen_values = true)]
    rate: f64,
}

#[derive(Debug, Args)]
struct ConvertDecimalArgs {
    /// Amount to convert
    #[arg(long, allow_hyphen_values = true)]
    amount: Decimal,

    /// Conversion rate
    #[arg(long, allow_hyphen_values = true)]
    rate: Decimal,
}

impl Cli {
    /// Runs the selected command, writing its result to `out`.
    pub(crate) fn run(self, out: &mut impl Write) -> Result<(), CliError> {
        match self.command {
            Commands::Display(args) => display(&args, out),
            Commands::Convert(args) => {
                debug!(amount = args.amount, rate = args.rate, "converting");

                writeln!(out, "{}", convert_price(args.amount, args.rate))?;

                Ok(())
            }
            Commands::ConvertDecimal(args) => {
                debug!(amount = %args.amount, rate = %args.rate, "converting decimal");

                writeln!(out, "{}", convert_decimal(args.amount, args.rate)?)?;

                Ok(())
            }
        }
    }
}

fn display(args: &DisplayArgs, out: &mut impl Write) -> Result<(), CliError> {
    let catalogue = match &args.catalogue {
        Some(path) => CurrencyCatalogue::from_path(path)?,
        None => CurrencyCatalogue::default(),
    };

    let currency = catalogue.resolve(&args.currency)?;

    let price = if args.strict {
        Price::try_new(args.amount, currency)?
    } else {
        Price::new(args.amount, currency)
    };

    writeln!(out, "{}", price.display_full_price()?)?;

    Ok(())
}
