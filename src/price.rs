//! Prices

use std::sync::Arc;

use thiserror::Error;

use crate::{
    conversion,
    currency::{Currency, FullDisplay},
};

/// Errors that can occur while building or displaying a price.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price has no currency to display.
    #[error("price has no currency")]
    MissingCurrency,

    /// The amount is `NaN` or infinite.
    #[error("price amount is not finite: {0}")]
    NonFiniteAmount(f64),
}

/// An amount paired with a shared reference to its currency.
///
/// The currency is held behind an [`Arc`] and never copied, so every price
/// built from the same `Arc` observes the same collaborator.
#[derive(Debug)]
pub struct Price<C: ?Sized = Currency> {
    amount: f64,
    currency: Option<Arc<C>>,
}

impl<C: FullDisplay + ?Sized> Price<C> {
    /// Creates a new price. The amount is not validated.
    pub fn new(amount: f64, currency: Arc<C>) -> Self {
        Self {
            amount,
            currency: Some(currency),
        }
    }

    /// Creates a price with no currency attached yet.
    pub fn without_currency(amount: f64) -> Self {
        Self {
            amount,
            currency: None,
        }
    }

    /// Creates a new price with a finite amount.
    ///
    /// # Errors
    ///
    /// - [`PriceError::NonFiniteAmount`]: `amount` is `NaN` or infinite.
    pub fn try_new(amount: f64, currency: Arc<C>) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NonFiniteAmount(amount));
        }

        Ok(Self::new(amount, currency))
    }

    /// Returns the amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Replaces the amount
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    /// Returns the shared currency, if any
    pub fn currency(&self) -> Option<&Arc<C>> {
        self.currency.as_ref()
    }

    /// Replaces the currency
    pub fn set_currency(&mut self, currency: Arc<C>) {
        self.currency = Some(currency);
    }

    /// Detaches the currency, returning the previous one
    pub fn clear_currency(&mut self) -> Option<Arc<C>> {
        self.currency.take()
    }

    /// Formats the amount followed by the full currency display,
    /// e.g. `"100 US Dollar (USD)"`.
    ///
    /// # Errors
    ///
    /// - [`PriceError::MissingCurrency`]: the price has no currency.
    pub fn display_full_price(&self) -> Result<String, PriceError> {
        let currency = self.currency.as_ref().ok_or(PriceError::MissingCurrency)?;

        Ok(format!(
            "{} {}",
            self.amount,
            currency.display_full_currency()
        ))
    }

    /// Converts an amount with a conversion rate.
    ///
    /// See [`conversion::convert_price`].
    pub fn convert_price(amount: f64, conversion_rate: f64) -> f64 {
        conversion::convert_price(amount, conversion_rate)
    }
}

impl<C: ?Sized> Clone for Price<C> {
    fn clone(&self) -> Self {
        Self {
            amount: self.amount,
            currency: self.currency.clone(),
        }
    }
}
