use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use country_browser::countries::{self, CountriesEffect, CountriesState, SEARCH_DEBOUNCE};
use country_browser::handles::{CountriesHandle, ScreenAccess};
use country_browser::model::Country;
use country_browser::source::{
    CountrySource, DefaultErrorFormatter, ErrorFormatter, MockCountrySource, SourceError,
};

fn usa() -> Country {
    Country::new("USA", "Americas")
}

fn us_virgin_islands() -> Country {
    Country::new("US Virgin Islands", "Americas")
}

fn canada() -> Country {
    Country::new("Canada", "Americas")
}

/// Formatter with a fixed message, standing in for the app's real one.
struct StaticFormatter;

impl ErrorFormatter for StaticFormatter {
    fn format(&self, _error: &SourceError) -> String {
        "Something went wrong".to_string()
    }
}

fn spawn_screen(
    source: &Arc<MockCountrySource>,
    formatter: Arc<dyn ErrorFormatter>,
) -> CountriesHandle {
    let (host, handle) = countries::new(
        Arc::clone(source) as Arc<dyn CountrySource>,
        formatter,
    );
    tokio::spawn(host.run());
    handle
}

async fn wait_for_state<F>(
    state: &mut watch::Receiver<CountriesState>,
    predicate: F,
) -> CountriesState
where
    F: Fn(&CountriesState) -> bool,
{
    loop {
        {
            let current = state.borrow_and_update();
            if predicate(&current) {
                return current.clone();
            }
        }
        state
            .changed()
            .await
            .expect("screen stopped before reaching the expected state");
    }
}

#[tokio::test]
async fn loads_countries_on_construction() {
    let source = Arc::new(MockCountrySource::new());
    source.expect_fetch_all().return_ok(vec![usa(), canada()]);

    let handle = spawn_screen(&source, Arc::new(DefaultErrorFormatter));

    let initial = handle.state();
    assert!(initial.loading);
    assert!(initial.items.is_empty());
    assert!(initial.original_items.is_empty());
    assert!(initial.error_message.is_none());

    let mut state = handle.watch_state();
    let loaded = wait_for_state(&mut state, |s| !s.loading).await;
    assert_eq!(loaded.items, vec![usa(), canada()]);
    assert_eq!(loaded.original_items, vec![usa(), canada()]);
    assert!(loaded.error_message.is_none());

    source.verify();
}

#[tokio::test(start_paused = true)]
async fn applies_only_the_last_query_in_the_debounce_window() {
    let source = Arc::new(MockCountrySource::new());
    source
        .expect_fetch_all()
        .return_ok(vec![usa(), us_virgin_islands(), canada()]);

    let handle = spawn_screen(&source, Arc::new(DefaultErrorFormatter));
    let mut state = handle.watch_state();
    wait_for_state(&mut state, |s| !s.loading).await;

    handle.search("USA").unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    handle.search("US").unwrap();

    // Past the first query's deadline, inside the restarted window: the
    // superseded "USA" filter must never reach published state.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!state.has_changed().unwrap());

    tokio::time::sleep(SEARCH_DEBOUNCE).await;
    let filtered = state.borrow_and_update().clone();
    assert_eq!(filtered.items, vec![usa(), us_virgin_islands()]);
    assert_eq!(
        filtered.original_items,
        vec![usa(), us_virgin_islands(), canada()]
    );
}

#[tokio::test]
async fn clearing_the_query_restores_all_items() {
    let source = Arc::new(MockCountrySource::new());
    source.expect_fetch_all().return_ok(vec![usa(), canada()]);

    let handle = spawn_screen(&source, Arc::new(DefaultErrorFormatter));
    let mut state = handle.watch_state();
    wait_for_state(&mut state, |s| !s.loading).await;

    handle.search("usa").unwrap();
    let filtered = wait_for_state(&mut state, |s| s.items.len() == 1).await;
    assert_eq!(filtered.items, vec![usa()]);

    handle.search("").unwrap();
    let restored = wait_for_state(&mut state, |s| s.items.len() == 2).await;
    assert_eq!(restored.items, vec![usa(), canada()]);
    assert_eq!(restored.original_items, vec![usa(), canada()]);
}

#[tokio::test]
async fn failed_reload_keeps_previous_items_and_formats_the_error() {
    let source = Arc::new(MockCountrySource::new());
    source.expect_fetch_all().return_ok(vec![usa(), canada()]);
    source
        .expect_fetch_all()
        .return_err(SourceError::FetchFailed("connection reset".into()));

    let handle = spawn_screen(&source, Arc::new(StaticFormatter));
    let mut state = handle.watch_state();
    wait_for_state(&mut state, |s| !s.loading).await;

    handle.reload().unwrap();
    let failed = wait_for_state(&mut state, |s| s.error_message.is_some()).await;
    assert!(!failed.loading);
    assert_eq!(failed.error_message.as_deref(), Some("Something went wrong"));
    assert_eq!(failed.items, vec![usa(), canada()]);
    assert_eq!(failed.original_items, vec![usa(), canada()]);

    source.verify();
}

#[tokio::test]
async fn successful_reload_clears_the_error() {
    let source = Arc::new(MockCountrySource::new());
    source
        .expect_fetch_all()
        .return_err(SourceError::FetchFailed("offline".into()));
    source.expect_fetch_all().return_ok(vec![usa()]);

    let handle = spawn_screen(&source, Arc::new(StaticFormatter));
    let mut state = handle.watch_state();
    let failed = wait_for_state(&mut state, |s| s.error_message.is_some()).await;
    assert!(failed.items.is_empty());

    handle.reload().unwrap();
    let recovered = wait_for_state(&mut state, |s| !s.loading && !s.items.is_empty()).await;
    assert!(recovered.error_message.is_none());
    assert_eq!(recovered.items, vec![usa()]);
}

#[tokio::test]
async fn dismissing_the_error_only_clears_the_message() {
    let source = Arc::new(MockCountrySource::new());
    source.expect_fetch_all().return_ok(vec![usa(), canada()]);
    source
        .expect_fetch_all()
        .return_err(SourceError::FetchFailed("offline".into()));

    let handle = spawn_screen(&source, Arc::new(StaticFormatter));
    let mut state = handle.watch_state();
    wait_for_state(&mut state, |s| !s.loading).await;
    handle.reload().unwrap();
    wait_for_state(&mut state, |s| s.error_message.is_some()).await;

    handle.dismiss_error().unwrap();
    let dismissed = wait_for_state(&mut state, |s| s.error_message.is_none()).await;
    assert_eq!(dismissed.items, vec![usa(), canada()]);
    assert!(!dismissed.loading);
}

#[tokio::test]
async fn item_click_emits_one_open_details_effect_without_touching_state() {
    let source = Arc::new(MockCountrySource::new());
    source.expect_fetch_all().return_ok(vec![usa(), canada()]);

    let handle = spawn_screen(&source, Arc::new(DefaultErrorFormatter));
    let mut state = handle.watch_state();
    let before = wait_for_state(&mut state, |s| !s.loading).await;

    let mut effects = handle.take_effects().expect("first claim succeeds");
    assert!(handle.take_effects().is_none(), "effects are claimed once");

    handle.on_item_click(usa()).unwrap();
    let effect = effects.recv().await.unwrap();
    assert_eq!(
        effect,
        CountriesEffect::OpenDetails {
            country_code: "USA".to_string()
        }
    );

    assert!(!state.has_changed().unwrap(), "click must not mutate state");
    assert_eq!(handle.state(), before);
}

#[tokio::test(start_paused = true)]
async fn superseded_reload_never_overwrites_the_later_one() {
    let source = Arc::new(MockCountrySource::new());
    // Initial load is slow; the reload that supersedes it is fast.
    source
        .expect_fetch_all()
        .after(Duration::from_millis(300))
        .return_ok(vec![usa()]);
    source
        .expect_fetch_all()
        .after(Duration::from_millis(10))
        .return_ok(vec![canada()]);

    let handle = spawn_screen(&source, Arc::new(DefaultErrorFormatter));
    let mut state = handle.watch_state();

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.reload().unwrap();

    let loaded = wait_for_state(&mut state, |s| !s.loading).await;
    assert_eq!(loaded.items, vec![canada()]);

    // Give the superseded load every chance to surface.
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!state.has_changed().unwrap());
    assert_eq!(handle.state().items, vec![canada()]);

    source.verify();
}
