//! Pricetag
//!
//! Pricetag pairs monetary amounts with a shared currency reference and converts
//! amounts with caller-supplied rates.

pub mod catalogue;
pub mod conversion;
pub mod currency;
pub mod prelude;
pub mod price;
