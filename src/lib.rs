//! # Country Browser
//!
//! > Presentation state management for a searchable country list and a
//! > country details screen, built on Tokio.
//!
//! This crate is the view-model layer of a country browser. It owns
//! asynchronous data loading, debounced text search, error surfacing, and
//! one-shot navigation effects. Rendering, the concrete data fetch, and app
//! navigation are collaborators behind traits.
//!
//! ## Concurrency Model
//!
//! Each screen runs as its own Tokio task (a [`ScreenHost`](framework::ScreenHost))
//! that exclusively owns its state and processes messages sequentially, so no
//! locks guard state mutation. State leaves the task only as complete
//! snapshots over a `watch` channel that multicasts the latest value to all
//! subscribers. Navigation effects travel over a separate channel whose
//! receiver can be claimed exactly once, so an effect is delivered at most
//! once and never replayed to a re-subscriber.
//!
//! At most one load is in flight per screen. A newer load supersedes the
//! older one: the older task is aborted, and a sequence token discards any
//! stale completion that slipped into the queue first. The search debounce is
//! a single restartable deadline owned by the host; every keystroke replaces
//! it outright.
//!
//! ## Module Tour
//!
//! - [`framework`] - the generic screen engine: [`ScreenModel`](framework::ScreenModel),
//!   [`ScreenHost`](framework::ScreenHost), [`ScreenHandle`](framework::ScreenHandle).
//! - [`model`] - the [`Country`](model::Country) entity.
//! - [`search`] - the pure filter applied on every settled query.
//! - [`source`] - the [`CountrySource`](source::CountrySource) boundary,
//!   [`SourceError`](source::SourceError), error formatting, and the mock and
//!   in-memory sources used by tests.
//! - [`countries`] / [`details`] - the two concrete screen models.
//! - [`handles`] - typed UI-facing handles wrapping the generic one.
//! - [`runtime`] - tracing setup and [`BrowserSystem`](runtime::BrowserSystem),
//!   which wires sources to screens and shuts them down.
//!
//! ## Quick Start
//!
//! ```ignore
//! let source = Arc::new(InMemoryCountrySource::new(countries));
//! let mut system = BrowserSystem::new(source, Arc::new(DefaultErrorFormatter));
//!
//! let mut state = system.countries.watch_state();
//! system.countries.search("americas")?;
//!
//! let mut effects = system.countries.take_effects().expect("first claim");
//! system.countries.on_item_click(country)?;
//! if let Some(CountriesEffect::OpenDetails { country_code }) = effects.recv().await {
//!     let details = system.open_details(&country_code)?;
//! }
//!
//! system.shutdown().await?;
//! ```
//!
//! Logging is structured `tracing`; control it with `RUST_LOG` after calling
//! [`runtime::setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=country_browser=debug cargo test
//! ```

pub mod countries;
pub mod details;
pub mod framework;
pub mod handles;
pub mod model;
pub mod runtime;
pub mod search;
pub mod source;
