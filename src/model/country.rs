use serde::{Deserialize, Serialize};

/// A country as supplied by the [`CountrySource`](crate::source::CountrySource).
///
/// Immutable value; never mutated after construction. Equality is by all
/// fields. `capital` and `currency_code` are absent for territories the
/// source has no detail data for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Country {
    /// Creates a country with no detail data.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            capital: None,
            currency_code: None,
        }
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    /// The identifier carried by the open-details navigation effect and
    /// accepted by [`fetch_by_code`](crate::source::CountrySource::fetch_by_code).
    /// Countries are keyed by name.
    pub fn code(&self) -> &str {
        &self.name
    }
}
