//! The searchable country list screen.

pub mod model;

pub use model::*;

use std::sync::Arc;

use crate::framework::ScreenHost;
use crate::handles::CountriesHandle;
use crate::source::{CountrySource, ErrorFormatter};

/// Creates the list screen's host and its handle.
///
/// The host starts loading as soon as it is spawned; spawn it with
/// `tokio::spawn(host.run())`.
pub fn new(
    source: Arc<dyn CountrySource>,
    formatter: Arc<dyn ErrorFormatter>,
) -> (ScreenHost<CountriesModel>, CountriesHandle) {
    let (host, handle) = ScreenHost::new(CountriesModel::new(source, formatter));
    (host, CountriesHandle::new(handle))
}
