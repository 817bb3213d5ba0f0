use tracing::{debug, instrument};

use crate::countries::{CountriesCommand, CountriesModel};
use crate::framework::{ScreenError, ScreenHandle};
use crate::handles::ScreenAccess;
use crate::model::Country;

/// Handle for the country list screen.
#[derive(Clone)]
pub struct CountriesHandle {
    inner: ScreenHandle<CountriesModel>,
}

impl CountriesHandle {
    pub fn new(inner: ScreenHandle<CountriesModel>) -> Self {
        Self { inner }
    }

    /// Re-fetches the country list.
    #[instrument(skip(self))]
    pub fn reload(&self) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(CountriesCommand::Reload)
    }

    /// Records a search query. The filter runs once the query settles for
    /// the debounce window; calling again restarts the window.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(CountriesCommand::Search(query.to_string()))
    }

    /// Reports a click on a list item.
    #[instrument(skip(self, country), fields(code = country.code()))]
    pub fn on_item_click(&self, country: Country) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(CountriesCommand::ItemClick(country))
    }

    /// Dismisses the current error message.
    #[instrument(skip(self))]
    pub fn dismiss_error(&self) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(CountriesCommand::DismissError)
    }
}

impl ScreenAccess<CountriesModel> for CountriesHandle {
    fn inner(&self) -> &ScreenHandle<CountriesModel> {
        &self.inner
    }
}
