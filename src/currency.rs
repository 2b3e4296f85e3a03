//! Currencies

use rusty_money::{Findable, iso};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while constructing a currency.
#[derive(Debug, Error, PartialEq)]
pub enum CurrencyError {
    /// The code is not part of the ISO 4217 table.
    #[error("unknown ISO currency code: {0}")]
    UnknownCode(String),
}

/// Something that can render itself as `"<name> (<code>)"`.
pub trait FullDisplay {
    /// Returns the currency name followed by its code in parentheses.
    fn display_full_currency(&self) -> String;
}

/// A named currency identified by a code
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Currency {
    name: String,
    code: String,
}

impl Currency {
    /// Creates a new currency from a display name and a code
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Builds a currency from the ISO 4217 table.
    ///
    /// The lookup ignores case, the stored code is the canonical upper-case one.
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::UnknownCode`]: `code` does not name an ISO currency.
    pub fn from_iso(code: &str) -> Result<Self, CurrencyError> {
        let Some(currency) = iso::Currency::find(&code.to_ascii_uppercase()) else {
            return Err(CurrencyError::UnknownCode(code.to_string()));
        };

        Ok(Self::from(currency))
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the code
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl From<&iso::Currency> for Currency {
    fn from(currency: &iso::Currency) -> Self {
        Self::new(currency.name, currency.iso_alpha_code)
    }
}

impl FullDisplay for Currency {
    fn display_full_currency(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl<T: FullDisplay + ?Sized> FullDisplay for &T {
    fn display_full_currency(&self) -> String {
        (**self).display_full_currency()
    }
}

impl FullDisplay for iso::Currency {
    fn display_full_currency(&self) -> String {
        format!("{} ({})", self.name, self.iso_alpha_code)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn display_full_currency_joins_name_and_code() {
        let currency = Currency::new("US Dollar", "USD");

        assert_eq!(currency.display_full_currency(), "US Dollar (USD)");
    }

    #[test]
    fn from_iso_uses_canonical_code() -> TestResult {
        let currency = Currency::from_iso("gbp")?;

        assert_eq!(currency.code(), "GBP");
        assert!(!currency.name().is_empty(), "ISO name should be populated");

        Ok(())
    }

    #[test]
    fn from_iso_rejects_unknown_code() {
        assert_eq!(
            Currency::from_iso("ZZZ"),
            Err(CurrencyError::UnknownCode("ZZZ".to_string()))
        );
    }

    #[test]
    fn iso_currency_matches_converted_currency() {
        let converted = Currency::from(iso::EUR);

        assert_eq!(
            iso::EUR.display_full_currency(),
            converted.display_full_currency()
        );
        assert!(
            converted.display_full_currency().ends_with(" (EUR)"),
            "code should close the display string"
        );
    }
}
