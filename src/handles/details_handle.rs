use tracing::{debug, instrument};

use crate::details::{DetailsCommand, DetailsModel};
use crate::framework::{ScreenError, ScreenHandle};
use crate::handles::ScreenAccess;

/// Handle for the country details screen.
#[derive(Clone)]
pub struct DetailsHandle {
    inner: ScreenHandle<DetailsModel>,
}

impl DetailsHandle {
    pub fn new(inner: ScreenHandle<DetailsModel>) -> Self {
        Self { inner }
    }

    /// Fetches the country for `code`. The screen remembers the code so
    /// [`DetailsHandle::reload`] can re-run the fetch.
    #[instrument(skip(self))]
    pub fn load(&self, code: &str) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(DetailsCommand::Load(code.to_string()))
    }

    /// Re-fetches the currently shown country.
    #[instrument(skip(self))]
    pub fn reload(&self) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(DetailsCommand::Reload)
    }

    /// Requests back navigation as a one-shot effect.
    #[instrument(skip(self))]
    pub fn on_back_requested(&self) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(DetailsCommand::Back)
    }

    /// Dismisses the current error message.
    #[instrument(skip(self))]
    pub fn dismiss_error(&self) -> Result<(), ScreenError> {
        debug!("Sending command");
        self.inner.send(DetailsCommand::DismissError)
    }
}

impl ScreenAccess<DetailsModel> for DetailsHandle {
    fn inner(&self) -> &ScreenHandle<DetailsModel> {
        &self.inner
    }
}
