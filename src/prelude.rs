//! Pricetag prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalogue::{CatalogueError, CurrencyCatalogue},
    conversion::{ConversionError, convert_decimal, convert_price},
    currency::{Currency, CurrencyError, FullDisplay},
    price::{Price, PriceError},
};
