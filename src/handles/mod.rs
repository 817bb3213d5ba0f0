//! Typed UI-facing wrappers around [`ScreenHandle`](crate::framework::ScreenHandle).

pub mod countries_handle;
pub mod details_handle;

pub use countries_handle::*;
pub use details_handle::*;

use tokio::sync::{mpsc, watch};

use crate::framework::{ScreenHandle, ScreenModel};

/// Shared observation surface for typed screen handles.
///
/// Typed handles implement [`ScreenAccess::inner`] and inherit the state
/// and effect accessors, the way the UI layer consumes every screen.
pub trait ScreenAccess<M: ScreenModel> {
    /// Access the inner generic handle.
    fn inner(&self) -> &ScreenHandle<M>;

    /// The latest published state snapshot.
    fn state(&self) -> M::State {
        self.inner().state()
    }

    /// Subscribes to state updates; the receiver starts at the latest value.
    fn watch_state(&self) -> watch::Receiver<M::State> {
        self.inner().watch_state()
    }

    /// Claims the effect stream. Only the first caller gets it; later calls
    /// return `None`.
    fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<M::Effect>> {
        self.inner().take_effects()
    }
}
