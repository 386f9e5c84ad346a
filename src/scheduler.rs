//! Delivery of delayed confirmations.
//!
//! The form only records a `PendingConfirmation`; a `TransitionScheduler`
//! waits out the delay and hands the generation back to the owner of the
//! form. Cancelling (or dropping) the scheduler guarantees no delivery
//! arrives after the component is gone.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::form::PendingConfirmation;

pub trait TransitionScheduler {
    /// Deliver `pending.generation` after `pending.delay`, replacing any
    /// previously scheduled delivery.
    fn schedule(&mut self, pending: PendingConfirmation);

    /// Abort the scheduled delivery, if any.
    fn cancel(&mut self);
}

type DueCallback = Arc<dyn Fn(u64) + Send + Sync + 'static>;

/// Runs each delay as a `tokio::time::sleep` task on the given runtime.
pub struct TokioScheduler {
    runtime: Handle,
    on_due: DueCallback,
    task: Option<JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new<F>(runtime: Handle, on_due: F) -> Self
    where
        F: Fn(u64) + Send + Sync + 'static,
    {
        Self {
            runtime,
            on_due: Arc::new(on_due),
            task: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl TransitionScheduler for TokioScheduler {
    fn schedule(&mut self, pending: PendingConfirmation) {
        self.cancel();
        let on_due = Arc::clone(&self.on_due);
        self.task = Some(self.runtime.spawn(async move {
            tokio::time::sleep(pending.delay).await;
            on_due(pending.generation);
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("cancelling scheduled confirmation");
            }
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
