//! State machine for the country details screen.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::framework::{ScreenContext, ScreenModel};
use crate::model::Country;
use crate::source::{CountrySource, ErrorFormatter, SourceError};

/// Snapshot of the details screen.
///
/// A failed fetch leaves `country` as previously held, so an error message
/// can coexist with the last successfully loaded data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    pub country: Option<Country>,
    pub loading: bool,
    pub error_message: Option<String>,
}

/// Commands accepted by the details screen.
#[derive(Debug)]
pub enum DetailsCommand {
    /// Fetches the country for `code` and remembers the code for reloads.
    Load(String),
    /// Re-fetches the currently held code.
    Reload,
    /// Requests back navigation.
    Back,
    /// Clears the error message without touching anything else.
    DismissError,
}

/// Internal completions, tagged with the load sequence token.
#[derive(Debug)]
pub enum DetailsEvent {
    Loaded {
        seq: u64,
        result: Result<Country, SourceError>,
    },
}

/// One-shot navigation effects emitted by the details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsEffect {
    Back,
}

/// The details screen's state machine. No search here; otherwise the same
/// catch-all failure policy and latest-wins load token as the list screen.
pub struct DetailsModel {
    source: Arc<dyn CountrySource>,
    formatter: Arc<dyn ErrorFormatter>,
    state: DetailsState,
    /// Code of the country this screen shows, once a load was commanded.
    code: Option<String>,
    load_seq: u64,
}

impl DetailsModel {
    pub fn new(source: Arc<dyn CountrySource>, formatter: Arc<dyn ErrorFormatter>) -> Self {
        Self {
            source,
            formatter,
            state: DetailsState::default(),
            code: None,
            load_seq: 0,
        }
    }

    fn start_load(&mut self, code: String, ctx: &mut ScreenContext<Self>) {
        self.load_seq += 1;
        let seq = self.load_seq;
        self.state.loading = true;
        self.state.error_message = None;
        ctx.publish(self.state.clone());

        let source = Arc::clone(&self.source);
        ctx.spawn_load(async move {
            DetailsEvent::Loaded {
                seq,
                result: source.fetch_by_code(&code).await,
            }
        });
        debug!(seq, "Details load started");
    }
}

#[async_trait]
impl ScreenModel for DetailsModel {
    type State = DetailsState;
    type Command = DetailsCommand;
    type Event = DetailsEvent;
    type Effect = DetailsEffect;

    fn initial_state(&self) -> DetailsState {
        self.state.clone()
    }

    async fn on_command(&mut self, command: DetailsCommand, ctx: &mut ScreenContext<Self>) {
        match command {
            DetailsCommand::Load(code) => {
                self.code = Some(code.clone());
                self.start_load(code, ctx);
            }
            DetailsCommand::Reload => match self.code.clone() {
                Some(code) => self.start_load(code, ctx),
                None => warn!("Reload requested before any load"),
            },
            DetailsCommand::Back => ctx.emit(DetailsEffect::Back),
            DetailsCommand::DismissError => {
                if self.state.error_message.take().is_some() {
                    ctx.publish(self.state.clone());
                }
            }
        }
    }

    async fn on_event(&mut self, event: DetailsEvent, ctx: &mut ScreenContext<Self>) {
        let DetailsEvent::Loaded { seq, result } = event;
        if seq != self.load_seq {
            debug!(seq, latest = self.load_seq, "Discarding superseded load");
            return;
        }

        self.state.loading = false;
        match result {
            Ok(country) => {
                info!(code = country.code(), "Country loaded");
                self.state.country = Some(country);
                self.state.error_message = None;
            }
            Err(error) => {
                warn!(%error, "Country details load failed");
                self.state.error_message = Some(self.formatter.format(&error));
            }
        }
        ctx.publish(self.state.clone());
    }
}
