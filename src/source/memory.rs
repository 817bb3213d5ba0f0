//! A canned, in-process country source.

use async_trait::async_trait;

use crate::model::Country;
use crate::source::{CountrySource, SourceError};

/// Serves a fixed country list from memory.
///
/// Used by end-to-end tests and demos where the real fetch layer is out of
/// scope. `fetch_by_code` resolves against [`Country::code`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountrySource {
    countries: Vec<Country>,
}

impl InMemoryCountrySource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl CountrySource for InMemoryCountrySource {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        self.countries
            .iter()
            .find(|country| country.code() == code)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(code.to_string()))
    }
}
