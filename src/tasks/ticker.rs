//! Repeating tick task with an explicit cancellation handle

use std::{
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    runtime::Handle,
    sync::oneshot,
    time::{interval_at, Instant},
};
use tracing::{debug, error};

/// Periodic scheduling on a tokio runtime
#[derive(Debug, Clone)]
pub struct Scheduler {
    runtime: Option<Handle>,
    /// Registrations that have not been cancelled yet
    active: Arc<AtomicUsize>,
    next_id: Arc<AtomicU64>,
}

impl Scheduler {
    /// Create a scheduler bound to the current tokio runtime, if any
    pub fn new() -> Self {
        Self::from_runtime(Handle::try_current().ok())
    }

    fn from_runtime(runtime: Option<Handle>) -> Self {
        Self {
            runtime,
            active: Arc::new(AtomicUsize::new(0)),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Run `callback` every `period`, starting one period from now.
    ///
    /// The callback keeps running until the returned handle is cancelled or dropped.
    pub fn schedule_repeating<F>(&self, period: Duration, mut callback: F) -> TickHandle
    where
        F: FnMut() + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let Some(runtime) = &self.runtime else {
            error!("No tokio runtime available, tick registration {} will never fire", id);
            return TickHandle::inert();
        };

        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        self.active.fetch_add(1, Ordering::SeqCst);

        runtime.spawn(async move {
            debug!("Tick registration {} started ({:?} period)", id, period);
            let mut interval = interval_at(Instant::now() + period, period);

            loop {
                tokio::select! {
                    // Cancellation wins over a tick that is due at the same time
                    biased;

                    _ = &mut cancel_rx => {
                        debug!("Tick registration {} cancelled", id);
                        break;
                    }

                    _ = interval.tick() => {
                        callback();
                    }
                }
            }
        });

        TickHandle {
            cancel_tx: Some(cancel_tx),
            active: Some(Arc::clone(&self.active)),
        }
    }

    /// Number of live registrations created by this scheduler and its clones
    pub fn active_registrations(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a repeating tick. Cancelling or dropping it stops the task.
#[derive(Debug)]
pub struct TickHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
    active: Option<Arc<AtomicUsize>>,
}

impl TickHandle {
    fn inert() -> Self {
        Self {
            cancel_tx: None,
            active: None,
        }
    }

    /// Whether the tick task is still scheduled
    pub fn is_active(&self) -> bool {
        self.cancel_tx.is_some()
    }

    /// Stop the tick task. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        let Some(cancel_tx) = self.cancel_tx.take() else {
            return;
        };

        // The task may already be gone if the runtime shut down
        let _ = cancel_tx.send(());
        if let Some(active) = self.active.take() {
            active.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
