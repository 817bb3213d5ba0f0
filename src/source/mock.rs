//! # Mock Country Source
//!
//! Utilities for testing screens in isolation from a real data source.
//!
//! Queue expectations with [`MockCountrySource::expect_fetch_all`] or
//! [`MockCountrySource::expect_fetch_by_code`], hand the source to a screen,
//! then call [`MockCountrySource::verify`] to assert every expectation was
//! consumed.
//!
//! # Example
//! ```ignore
//! let source = Arc::new(MockCountrySource::new());
//! source.expect_fetch_all().return_ok(vec![usa()]);
//! source
//!     .expect_fetch_all()
//!     .after(Duration::from_millis(300))
//!     .return_err(SourceError::FetchFailed("timeout".into()));
//!
//! // Use the source in tests...
//! source.verify();
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::model::Country;
use crate::source::{CountrySource, SourceError};

/// One queued response, consumed by the next matching call.
#[derive(Debug)]
enum Expectation {
    FetchAll {
        delay: Option<Duration>,
        response: Result<Vec<Country>, SourceError>,
    },
    FetchByCode {
        code: String,
        delay: Option<Duration>,
        response: Result<Country, SourceError>,
    },
}

/// A scripted [`CountrySource`] with expectation tracking.
///
/// Calls are matched against expectations in FIFO order; a call with no
/// matching expectation at the queue head panics the fetching task. The
/// optional per-expectation delay runs on the Tokio clock, so tests under
/// `start_paused` can shape which of two loads completes first.
#[derive(Debug, Default)]
pub struct MockCountrySource {
    expectations: Mutex<VecDeque<Expectation>>,
}

impl MockCountrySource {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_all` call.
    pub fn expect_fetch_all(&self) -> FetchAllExpectation<'_> {
        FetchAllExpectation {
            source: self,
            delay: None,
        }
    }

    /// Expects a `fetch_by_code` call for `code`.
    pub fn expect_fetch_by_code(&self, code: impl Into<String>) -> FetchByCodeExpectation<'_> {
        FetchByCodeExpectation {
            source: self,
            code: code.into(),
            delay: None,
        }
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("not all expectations were met, {remaining} remaining");
        }
    }

    fn push(&self, expectation: Expectation) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    fn pop(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl CountrySource for MockCountrySource {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        match self.pop() {
            Some(Expectation::FetchAll { delay, response }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            other => panic!("unexpected fetch_all call, queued expectation: {other:?}"),
        }
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        match self.pop() {
            Some(Expectation::FetchByCode {
                code: expected,
                delay,
                response,
            }) => {
                assert_eq!(code, expected, "fetch_by_code called with the wrong code");
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            other => panic!("unexpected fetch_by_code call, queued expectation: {other:?}"),
        }
    }
}

/// Builder for `fetch_all` expectations.
#[must_use = "call return_ok or return_err to queue the expectation"]
pub struct FetchAllExpectation<'a> {
    source: &'a MockCountrySource,
    delay: Option<Duration>,
}

impl FetchAllExpectation<'_> {
    /// Completes the call only after `delay` on the Tokio clock.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_ok(self, countries: Vec<Country>) {
        self.source.push(Expectation::FetchAll {
            delay: self.delay,
            response: Ok(countries),
        });
    }

    pub fn return_err(self, error: SourceError) {
        self.source.push(Expectation::FetchAll {
            delay: self.delay,
            response: Err(error),
        });
    }
}

/// Builder for `fetch_by_code` expectations.
#[must_use = "call return_ok or return_err to queue the expectation"]
pub struct FetchByCodeExpectation<'a> {
    source: &'a MockCountrySource,
    code: String,
    delay: Option<Duration>,
}

impl FetchByCodeExpectation<'_> {
    /// Completes the call only after `delay` on the Tokio clock.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn return_ok(self, country: Country) {
        self.source.push(Expectation::FetchByCode {
            code: self.code,
            delay: self.delay,
            response: Ok(country),
        });
    }

    pub fn return_err(self, error: SourceError) {
        self.source.push(Expectation::FetchByCode {
            code: self.code,
            delay: self.delay,
            response: Err(error),
        });
    }
}
