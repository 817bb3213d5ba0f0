//! The country data boundary consumed by the screens.
//!
//! Screens never talk to the network or storage directly; they hold an
//! `Arc<dyn CountrySource>` and treat every call as fallible. See [`mock`]
//! for testing screens without a real source and [`memory`] for a canned
//! in-process source.

pub mod error;
pub mod memory;
pub mod mock;

pub use error::*;
pub use memory::*;
pub use mock::*;

use async_trait::async_trait;

use crate::model::Country;

/// Asynchronous supplier of country data.
///
/// Both operations are total over the `Result`: callers must handle the
/// failure branch, and implementations must not panic.
#[async_trait]
pub trait CountrySource: Send + Sync + 'static {
    /// Fetches the full country list.
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;

    /// Fetches a single country by its code (see [`Country::code`]).
    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError>;
}
