//! # Core Screen Framework
//!
//! This module defines the generic building blocks for screen state
//! management.
//!
//! ## Key Types
//!
//! - [`ScreenModel`]: The trait a screen's state machine implements.
//! - [`ScreenHost`]: The task that owns a model and drives its event loop.
//! - [`ScreenHandle`]: The UI-facing endpoint (commands, state, effects).
//! - [`ScreenContext`]: Handed to every hook; publishes state, emits effects,
//!   schedules background loads and the debounce timer.
//! - [`ScreenError`]: Command delivery errors (e.g. ScreenClosed).

use std::fmt::Debug;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

/// Trait a screen's state machine implements to be driven by a [`ScreenHost`].
///
/// The associated types enforce that a screen only ever receives its own
/// commands and publishes its own state. `Event` is the screen's internal
/// message kind: completions of background work started through
/// [`ScreenContext::spawn_load`] come back to the model as events, on the
/// host task, so state mutation stays single-threaded.
///
/// # Provided Methods (Hooks)
///
/// [`ScreenModel::on_start`] and [`ScreenModel::on_timer_fired`] have default
/// no-op implementations; implement them only when the screen auto-loads or
/// debounces.
#[async_trait]
pub trait ScreenModel: Send + Sized + 'static {
    /// The full state snapshot published to observers.
    type State: Clone + Debug + Send + Sync + 'static;

    /// Commands accepted from the UI layer.
    type Command: Send + Debug + 'static;

    /// Internal messages, typically background-load completions.
    type Event: Send + Debug + 'static;

    /// One-shot effects delivered to at most one observer.
    type Effect: Send + Debug + 'static;

    /// The state observers see before the host has processed anything.
    fn initial_state(&self) -> Self::State;

    /// Called once when the host loop starts, before any command.
    /// Runs exactly once per screen lifetime; re-subscription of observers
    /// never triggers it again.
    async fn on_start(&mut self, _ctx: &mut ScreenContext<Self>) {}

    /// Called for every command received from a handle.
    async fn on_command(&mut self, command: Self::Command, ctx: &mut ScreenContext<Self>);

    /// Called when a background load spawned through the context completes.
    async fn on_event(&mut self, event: Self::Event, ctx: &mut ScreenContext<Self>);

    /// Called when the debounce timer armed via
    /// [`ScreenContext::restart_timer`] elapses without being restarted.
    async fn on_timer_fired(&mut self, _ctx: &mut ScreenContext<Self>) {}
}

/// Errors that can occur when talking to a screen from a handle.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ScreenError {
    /// The host task has stopped; the command was not delivered.
    #[error("screen closed")]
    ScreenClosed,
}

/// Scheduling and publishing surface handed to every [`ScreenModel`] hook.
///
/// The context owns the single in-flight load slot and the single debounce
/// deadline, so a model cannot accidentally run two loads or two timers at
/// once.
pub struct ScreenContext<M: ScreenModel> {
    state_tx: watch::Sender<M::State>,
    effect_tx: mpsc::UnboundedSender<M::Effect>,
    event_tx: mpsc::UnboundedSender<M::Event>,
    timer_deadline: Option<Instant>,
    load_task: Option<JoinHandle<()>>,
}

impl<M: ScreenModel> ScreenContext<M> {
    /// Publishes a complete state snapshot to all current and future
    /// observers. Observers always see the latest value on subscription.
    pub fn publish(&self, state: M::State) {
        let _ = self.state_tx.send(state);
    }

    /// Emits a one-shot effect. Queued until the first observer claims the
    /// effect stream; dropped silently if that observer has gone away.
    pub fn emit(&self, effect: M::Effect) {
        let _ = self.effect_tx.send(effect);
    }

    /// Spawns a background load whose result comes back to the model as an
    /// event on the host task.
    ///
    /// Only one load is in flight at a time: a previous load still running is
    /// aborted. A superseded load that already queued its event is the
    /// model's to discard (tag events with a sequence token).
    pub fn spawn_load<F>(&mut self, load: F)
    where
        F: Future<Output = M::Event> + Send + 'static,
    {
        let events = self.event_tx.clone();
        let task = tokio::spawn(async move {
            let _ = events.send(load.await);
        });
        if let Some(previous) = self.load_task.replace(task) {
            previous.abort();
        }
    }

    /// Arms the debounce timer, cancelling any deadline already pending.
    /// [`ScreenModel::on_timer_fired`] runs only if no further restart
    /// happens within `after`.
    pub fn restart_timer(&mut self, after: Duration) {
        self.timer_deadline = Some(Instant::now() + after);
    }

    /// Cancels a pending debounce timer, if any.
    pub fn cancel_timer(&mut self) {
        self.timer_deadline = None;
    }
}

/// The task that owns a [`ScreenModel`] and drives its event loop.
///
/// All state mutation happens inside [`ScreenHost::run`], one message at a
/// time, so the model needs no locks. The loop ends when every
/// [`ScreenHandle`] has been dropped; teardown aborts the in-flight load and
/// drops the pending timer, so no completion is applied afterwards.
pub struct ScreenHost<M: ScreenModel> {
    model: M,
    commands: mpsc::UnboundedReceiver<M::Command>,
    events: mpsc::UnboundedReceiver<M::Event>,
    ctx: ScreenContext<M>,
}

impl<M: ScreenModel> ScreenHost<M> {
    /// Creates a host for `model` and the handle used to reach it.
    pub fn new(model: M) -> (Self, ScreenHandle<M>) {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (event_tx, events) = mpsc::unbounded_channel();
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(model.initial_state());

        let host = Self {
            model,
            commands,
            events,
            ctx: ScreenContext {
                state_tx,
                effect_tx,
                event_tx,
                timer_deadline: None,
                load_task: None,
            },
        };
        let handle = ScreenHandle {
            command_tx,
            state_rx,
            effect_rx: Arc::new(Mutex::new(Some(effect_rx))),
        };
        (host, handle)
    }

    /// Runs the screen's event loop until the last handle is dropped.
    pub async fn run(self) {
        let Self {
            mut model,
            mut commands,
            mut events,
            mut ctx,
        } = self;

        let screen = std::any::type_name::<M>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(screen, "Screen started");

        model.on_start(&mut ctx).await;

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => {
                        debug!(screen, ?command, "Command");
                        model.on_command(command, &mut ctx).await;
                    }
                    // Every handle dropped: the screen is being torn down.
                    None => break,
                },
                Some(event) = events.recv() => {
                    debug!(screen, ?event, "Event");
                    model.on_event(event, &mut ctx).await;
                }
                _ = sleep_until_deadline(ctx.timer_deadline), if ctx.timer_deadline.is_some() => {
                    debug!(screen, "Timer fired");
                    ctx.timer_deadline = None;
                    model.on_timer_fired(&mut ctx).await;
                }
            }
        }

        if let Some(load) = ctx.load_task.take() {
            load.abort();
        }
        info!(screen, "Screen stopped");
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

/// UI-facing endpoint of a screen.
///
/// Cloneable; all clones reach the same host. Commands are fire-and-forget.
/// State follows replay-latest semantics: every subscriber immediately
/// observes the most recent snapshot. Effects follow deliver-once semantics:
/// the effect stream can be claimed by exactly one observer, and queued
/// effects are handed only to that observer.
pub struct ScreenHandle<M: ScreenModel> {
    command_tx: mpsc::UnboundedSender<M::Command>,
    state_rx: watch::Receiver<M::State>,
    effect_rx: Arc<Mutex<Option<mpsc::UnboundedReceiver<M::Effect>>>>,
}

impl<M: ScreenModel> Clone for ScreenHandle<M> {
    fn clone(&self) -> Self {
        Self {
            command_tx: self.command_tx.clone(),
            state_rx: self.state_rx.clone(),
            effect_rx: Arc::clone(&self.effect_rx),
        }
    }
}

impl<M: ScreenModel> ScreenHandle<M> {
    /// Sends a command to the screen.
    pub fn send(&self, command: M::Command) -> Result<(), ScreenError> {
        self.command_tx
            .send(command)
            .map_err(|_| ScreenError::ScreenClosed)
    }

    /// The latest published state snapshot.
    pub fn state(&self) -> M::State {
        self.state_rx.borrow().clone()
    }

    /// Subscribes to state updates. The receiver starts at the latest value.
    pub fn watch_state(&self) -> watch::Receiver<M::State> {
        self.state_rx.clone()
    }

    /// Claims the effect stream. Only the first caller across all clones
    /// gets it; later calls return `None`, so effects are never replayed to
    /// a re-subscriber.
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<M::Effect>> {
        self.effect_rx
            .lock()
            .expect("effect receiver lock poisoned")
            .take()
    }
}

// =============================================================================
// EXAMPLE USAGE (Test)
// =============================================================================
