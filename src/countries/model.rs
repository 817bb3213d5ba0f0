//! State machine for the country list screen.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::framework::{ScreenContext, ScreenModel};
use crate::model::Country;
use crate::search::filter_countries;
use crate::source::{CountrySource, ErrorFormatter, SourceError};

/// Caller-side inactivity required before a search query is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Snapshot of the list screen.
///
/// `items` is always a filter-subsequence of `original_items`.
/// `error_message` is set only by a failed load and cleared by the next
/// successful load or an explicit [`CountriesCommand::DismissError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountriesState {
    /// Countries currently shown, after any settled search filter.
    pub items: Vec<Country>,
    /// The unfiltered result of the last successful load.
    pub original_items: Vec<Country>,
    pub loading: bool,
    pub error_message: Option<String>,
}

/// Commands accepted by the list screen.
#[derive(Debug)]
pub enum CountriesCommand {
    /// Re-fetches the full list. Failures keep the previous items.
    Reload,
    /// Records the query and restarts the debounce window.
    Search(String),
    /// Requests navigation to the clicked country's details.
    ItemClick(Country),
    /// Clears the error message without touching anything else.
    DismissError,
}

/// Internal completions, tagged with the load sequence token.
#[derive(Debug)]
pub enum CountriesEvent {
    Loaded {
        seq: u64,
        result: Result<Vec<Country>, SourceError>,
    },
}

/// One-shot navigation effects emitted by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesEffect {
    OpenDetails { country_code: String },
}

/// The list screen's state machine.
///
/// Loads once on start, reloads on demand, debounces search, and emits an
/// open-details effect per click. Source failures never leave this type:
/// they become formatted text in [`CountriesState::error_message`].
pub struct CountriesModel {
    source: Arc<dyn CountrySource>,
    formatter: Arc<dyn ErrorFormatter>,
    state: CountriesState,
    /// Highest load token issued; completions with an older token are stale.
    load_seq: u64,
    /// Latest query seen; applied when the debounce window settles.
    pending_query: Option<String>,
}

impl CountriesModel {
    pub fn new(source: Arc<dyn CountrySource>, formatter: Arc<dyn ErrorFormatter>) -> Self {
        Self {
            source,
            formatter,
            state: CountriesState {
                loading: true,
                ..CountriesState::default()
            },
            load_seq: 0,
            pending_query: None,
        }
    }

    fn start_load(&mut self, ctx: &mut ScreenContext<Self>) {
        self.load_seq += 1;
        let seq = self.load_seq;
        self.state.loading = true;
        self.state.error_message = None;
        ctx.publish(self.state.clone());

        let source = Arc::clone(&self.source);
        ctx.spawn_load(async move {
            CountriesEvent::Loaded {
                seq,
                result: source.fetch_all().await,
            }
        });
        debug!(seq, "List load started");
    }
}

#[async_trait]
impl ScreenModel for CountriesModel {
    type State = CountriesState;
    type Command = CountriesCommand;
    type Event = CountriesEvent;
    type Effect = CountriesEffect;

    fn initial_state(&self) -> CountriesState {
        self.state.clone()
    }

    async fn on_start(&mut self, ctx: &mut ScreenContext<Self>) {
        self.start_load(ctx);
    }

    async fn on_command(&mut self, command: CountriesCommand, ctx: &mut ScreenContext<Self>) {
        match command {
            CountriesCommand::Reload => self.start_load(ctx),
            CountriesCommand::Search(query) => {
                self.pending_query = Some(query);
                ctx.restart_timer(SEARCH_DEBOUNCE);
            }
            CountriesCommand::ItemClick(country) => {
                debug!(code = country.code(), "Item clicked");
                ctx.emit(CountriesEffect::OpenDetails {
                    country_code: country.code().to_string(),
                });
            }
            CountriesCommand::DismissError => {
                if self.state.error_message.take().is_some() {
                    ctx.publish(self.state.clone());
                }
            }
        }
    }

    async fn on_event(&mut self, event: CountriesEvent, ctx: &mut ScreenContext<Self>) {
        let CountriesEvent::Loaded { seq, result } = event;
        if seq != self.load_seq {
            debug!(seq, latest = self.load_seq, "Discarding superseded load");
            return;
        }

        self.state.loading = false;
        match result {
            Ok(countries) => {
                info!(count = countries.len(), "Countries loaded");
                self.state.original_items = countries.clone();
                self.state.items = countries;
                self.state.error_message = None;
            }
            Err(error) => {
                warn!(%error, "Country list load failed");
                self.state.error_message = Some(self.formatter.format(&error));
            }
        }
        ctx.publish(self.state.clone());
    }

    async fn on_timer_fired(&mut self, ctx: &mut ScreenContext<Self>) {
        if let Some(query) = self.pending_query.take() {
            self.state.items = filter_countries(&self.state.original_items, &query);
            debug!(%query, matches = self.state.items.len(), "Search applied");
            ctx.publish(self.state.clone());
        }
    }
}
