//! Generic screen framework for view-model state management.
//!
//! This module provides the core building blocks for running screen state
//! machines as isolated tasks with replay-latest state channels and
//! deliver-once effect channels.
//!
//! # Main Components
//!
//! - [`ScreenModel`] - Trait that screen state machines implement
//! - [`ScreenHost`] - Task that owns a model and drives its event loop
//! - [`ScreenHandle`] - UI-facing endpoint for commands, state, and effects
//! - [`ScreenContext`] - Scheduling and publishing surface for model hooks
//! - [`ScreenError`] - Command delivery errors

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
