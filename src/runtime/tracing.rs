//! # Observability & Tracing
//!
//! Structured logging for the whole crate, built on the `tracing` stack.
//!
//! ## What Gets Traced
//!
//! - **Screen lifecycle**: host start and stop, at `info`
//! - **Messages**: every command, event, and timer firing, at `debug`
//! - **Loads**: load starts, completions, and superseded results
//! - **Failures**: formatted and logged at `warn` before landing in state
//!
//! ## Configuration
//!
//! Verbosity is controlled with the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=country_browser=debug cargo test
//! ```
//!
//! The compact format hides module targets; log lines carry a `screen`
//! field instead, so the two hosts stay distinguishable.

/// Initializes the tracing subscriber for the process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Screens are identified by the `screen` field instead
        .compact()
        .init();
}
