//! The country details screen.

pub mod model;

pub use model::*;

use std::sync::Arc;

use crate::framework::ScreenHost;
use crate::handles::DetailsHandle;
use crate::source::{CountrySource, ErrorFormatter};

/// Creates the details screen's host and its handle.
///
/// The screen is idle until it receives a [`DetailsCommand::Load`]; spawn
/// the host with `tokio::spawn(host.run())` and send the code through the
/// handle.
pub fn new(
    source: Arc<dyn CountrySource>,
    formatter: Arc<dyn ErrorFormatter>,
) -> (ScreenHost<DetailsModel>, DetailsHandle) {
    let (host, handle) = ScreenHost::new(DetailsModel::new(source, formatter));
    (host, DetailsHandle::new(handle))
}
