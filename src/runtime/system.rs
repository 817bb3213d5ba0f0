use std::sync::Arc;

use tracing::info;

use crate::countries;
use crate::details;
use crate::framework::ScreenError;
use crate::handles::{CountriesHandle, DetailsHandle};
use crate::source::{CountrySource, ErrorFormatter};

/// Runtime orchestrator for the browser's screens.
///
/// `BrowserSystem` spawns the country list screen at construction (it loads
/// immediately), opens detail screens on demand, and tears everything down
/// on [`BrowserSystem::shutdown`].
///
/// # Example
///
/// ```ignore
/// let mut system = BrowserSystem::new(source, formatter);
///
/// // React to a click effect by opening the details screen
/// let details = system.open_details(&country_code)?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct BrowserSystem {
    /// Handle for the country list screen.
    pub countries: CountriesHandle,

    source: Arc<dyn CountrySource>,
    formatter: Arc<dyn ErrorFormatter>,

    /// Task handles for all running screen hosts (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BrowserSystem {
    /// Spawns the country list screen and returns the wired system.
    ///
    /// The list screen starts its first load right away; observers see
    /// `loading == true` until it resolves.
    pub fn new(source: Arc<dyn CountrySource>, formatter: Arc<dyn ErrorFormatter>) -> Self {
        let (host, countries) = countries::new(Arc::clone(&source), Arc::clone(&formatter));
        let handle = tokio::spawn(host.run());

        Self {
            countries,
            source,
            formatter,
            handles: vec![handle],
        }
    }

    /// Spawns a details screen for `code` and issues its initial load.
    ///
    /// The returned handle is the only reference to the screen; dropping it
    /// tears the screen down.
    pub fn open_details(&mut self, code: &str) -> Result<DetailsHandle, ScreenError> {
        let (host, handle) = details::new(Arc::clone(&self.source), Arc::clone(&self.formatter));
        self.handles.push(tokio::spawn(host.run()));
        handle.load(code)?;
        Ok(handle)
    }

    /// Gracefully shuts down every screen this system spawned.
    ///
    /// Dropping the list handle closes its command channel, which ends the
    /// host loop. Detail screens end the same way when their handles are
    /// dropped by the caller; drop them before calling this, or the join
    /// will wait for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all hosts shut down cleanly
    /// - `Err(String)` if any host task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down screens...");

        let Self {
            countries, handles, ..
        } = self;
        drop(countries);

        let mut failures = Vec::new();
        for handle in handles {
            if let Err(error) = handle.await {
                failures.push(error.to_string());
            }
        }

        if failures.is_empty() {
            info!("All screens stopped");
            Ok(())
        } else {
            Err(failures.join("; "))
        }
    }
}
