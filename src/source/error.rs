//! Error types for the country source boundary.

use thiserror::Error;

/// Errors a [`CountrySource`](super::CountrySource) operation can return.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The fetch itself failed (network, storage, decoding).
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// No country exists for the requested code.
    #[error("country not found: {0}")]
    NotFound(String),
}

/// Maps source failures to user-displayable text.
///
/// Total function: every error kind maps to a string, and implementations
/// must not panic. Screens store the result in state; they never rethrow.
pub trait ErrorFormatter: Send + Sync + 'static {
    fn format(&self, error: &SourceError) -> String;
}

/// Stock formatter used when the app supplies nothing fancier.
#[derive(Debug, Default, Clone)]
pub struct DefaultErrorFormatter;

impl ErrorFormatter for DefaultErrorFormatter {
    fn format(&self, error: &SourceError) -> String {
        match error {
            SourceError::FetchFailed(_) => {
                "Could not load countries. Check your connection and try again.".to_string()
            }
            SourceError::NotFound(code) => format!("No country found for \"{code}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_every_error_kind() {
        let formatter = DefaultErrorFormatter;
        assert!(!formatter
            .format(&SourceError::FetchFailed("timeout".into()))
            .is_empty());
        assert_eq!(
            formatter.format(&SourceError::NotFound("Atlantis".into())),
            "No country found for \"Atlantis\""
        );
    }
}
