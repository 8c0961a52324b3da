//! Elapsed-time counter bound to a display surface

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    dom::{SurfaceLookup, SurfaceRef},
    state::{format_elapsed, RunState, TimerState},
    tasks::{Scheduler, TickHandle},
    utils::lock,
};

/// Interval between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct Counter {
    seconds: u64,
    run_state: RunState,
    /// Bumped on every start/stop/reset so a stale tick can tell it was superseded
    generation: u64,
    started_at: Option<DateTime<Utc>>,
}

impl Counter {
    fn snapshot(&self) -> TimerState {
        TimerState {
            seconds: self.seconds,
            run_state: self.run_state,
            display: format_elapsed(self.seconds),
            started_at: self.started_at,
        }
    }
}

/// Start/stop/reset timer that writes `MM:SS` to its target on every tick.
///
/// The target is resolved once, at creation. Without a target the timer still
/// counts. Dropping the timer cancels its tick.
#[derive(Debug)]
pub struct Timer {
    counter: Arc<Mutex<Counter>>,
    target: Option<SurfaceRef>,
    scheduler: Scheduler,
    registration: Mutex<Option<TickHandle>>,
    update_tx: Arc<watch::Sender<TimerState>>,
    /// Keep the receiver alive to prevent channel closure
    _update_rx: watch::Receiver<TimerState>,
}

impl Timer {
    /// Create a timer bound to the element with the given id
    pub fn create(lookup: &dyn SurfaceLookup, id: &str, scheduler: Scheduler) -> Self {
        let target = lookup.lookup(id);
        if target.is_none() {
            debug!("Timer target #{} not found, display updates disabled", id);
        }
        Self::with_target(target, scheduler)
    }

    /// Create a timer bound to a surface handle, or headless with `None`
    pub fn with_target(target: Option<SurfaceRef>, scheduler: Scheduler) -> Self {
        let (update_tx, update_rx) = watch::channel(TimerState::new());

        Self {
            counter: Arc::new(Mutex::new(Counter::default())),
            target,
            scheduler,
            registration: Mutex::new(None),
            update_tx: Arc::new(update_tx),
            _update_rx: update_rx,
        }
    }

    /// Start counting. Restarting replaces the previous tick registration.
    pub fn start(&self) {
        let mut registration = lock(&self.registration);
        if let Some(mut previous) = registration.take() {
            previous.cancel();
        }

        let generation = {
            let mut counter = lock(&self.counter);
            counter.generation += 1;
            counter.run_state = RunState::Running;
            counter.started_at = Some(Utc::now());
            self.update_tx.send_replace(counter.snapshot());
            counter.generation
        };

        let counter = Arc::clone(&self.counter);
        let target = self.target.clone();
        let update_tx = Arc::clone(&self.update_tx);

        *registration = Some(self.scheduler.schedule_repeating(TICK_PERIOD, move || {
            let mut counter = lock(&counter);
            if counter.generation != generation || counter.run_state != RunState::Running {
                return;
            }

            counter.seconds += 1;
            let snapshot = counter.snapshot();
            render(target.as_ref(), &snapshot.display);
            update_tx.send_replace(snapshot);
        }));

        info!("Timer started at {}", self.format());
    }

    /// Stop counting. The display keeps its last value.
    pub fn stop(&self) {
        let mut registration = lock(&self.registration);
        let mut counter = lock(&self.counter);
        if counter.run_state == RunState::Stopped && registration.is_none() {
            return;
        }

        if let Some(mut previous) = registration.take() {
            previous.cancel();
        }
        counter.generation += 1;
        counter.run_state = RunState::Stopped;
        self.update_tx.send_replace(counter.snapshot());

        info!("Timer stopped at {}", format_elapsed(counter.seconds));
    }

    /// Stop counting, zero the counter and show `00:00`
    pub fn reset(&self) {
        let mut registration = lock(&self.registration);
        if let Some(mut previous) = registration.take() {
            previous.cancel();
        }

        let mut counter = lock(&self.counter);
        counter.generation += 1;
        counter.seconds = 0;
        counter.run_state = RunState::Stopped;
        counter.started_at = None;

        let snapshot = counter.snapshot();
        render(self.target.as_ref(), &snapshot.display);
        self.update_tx.send_replace(snapshot);

        debug!("Timer reset");
    }

    /// Elapsed seconds as `MM:SS`
    pub fn format(&self) -> String {
        format_elapsed(self.value())
    }

    /// Elapsed seconds
    pub fn value(&self) -> u64 {
        lock(&self.counter).seconds
    }

    pub fn run_state(&self) -> RunState {
        lock(&self.counter).run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    pub fn snapshot(&self) -> TimerState {
        lock(&self.counter).snapshot()
    }

    /// Watch every state change, ticks included
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.update_tx.subscribe()
    }

    /// Whether a tick registration is live
    pub fn has_registration(&self) -> bool {
        lock(&self.registration)
            .as_ref()
            .is_some_and(TickHandle::is_active)
    }
}

fn render(target: Option<&SurfaceRef>, display: &str) {
    if let Some(target) = target {
        target.set_text(display);
    }
}
