//! Currency catalogue
//!
//! A set of currencies loaded from YAML:
//!
//! ```yaml
//! currencies:
//!   - name: US Dollar
//!     code: USD
//!   - name: Galactic Credit
//!     code: GCR
//! ```

use std::{fs, path::Path, sync::Arc};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::currency::Currency;

/// Catalogue loading and lookup errors
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// IO error reading the catalogue file
    #[error("Failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The same code appears twice
    #[error("Duplicate currency code: {0}")]
    DuplicateCode(String),

    /// Neither the catalogue nor the ISO table knows the code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    currencies: Vec<Currency>,
}

/// Currencies keyed by their upper-cased code
#[derive(Debug, Default)]
pub struct CurrencyCatalogue {
    currencies: FxHashMap<String, Arc<Currency>>,
}

impl CurrencyCatalogue {
    /// Parses a catalogue from a YAML document
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::Yaml`]: the document is not a valid catalogue.
    /// - [`CatalogueError::DuplicateCode`]: two entries share a code.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = serde_norway::from_str(yaml)?;

        let mut catalogue = Self::default();

        for currency in file.currencies {
            catalogue.insert(currency)?;
        }

        debug!(count = catalogue.len(), "loaded currency catalogue");

        Ok(catalogue)
    }

    /// Reads and parses a catalogue file
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`CurrencyCatalogue::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();

        debug!(path = %path.display(), "reading currency catalogue");

        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Adds a currency, returning the shared handle stored in the catalogue.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::DuplicateCode`]: the code is already present.
    pub fn insert(&mut self, currency: Currency) -> Result<Arc<Currency>, CatalogueError> {
        let key = currency.code().to_ascii_uppercase();

        if self.currencies.contains_key(&key) {
            return Err(CatalogueError::DuplicateCode(key));
        }

        let currency = Arc::new(currency);

        self.currencies.insert(key, Arc::clone(&currency));

        Ok(currency)
    }

    /// Looks up a currency by code, ignoring case
    pub fn get(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies.get(&code.to_ascii_uppercase()).cloned()
    }

    /// Looks up a currency in the catalogue, falling back to the ISO table.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::UnknownCurrency`]: the code is in neither.
    pub fn resolve(&self, code: &str) -> Result<Arc<Currency>, CatalogueError> {
        if let Some(currency) = self.get(code) {
            return Ok(currency);
        }

        let Ok(currency) = Currency::from_iso(code) else {
            return Err(CatalogueError::UnknownCurrency(code.to_string()));
        };

        debug!(code = currency.code(), "resolved currency from ISO table");

        Ok(Arc::new(currency))
    }

    /// Number of currencies in the catalogue
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
