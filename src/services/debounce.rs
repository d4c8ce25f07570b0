//! Debouncer
//!
//! The single cancelable scheduled task behind filter-change re-queries.
//! Expiry is reported as `ServiceEvent::DebounceElapsed`; each schedule gets a
//! new generation so an expiry that raced with a newer schedule can be told
//! apart and ignored.

use crossbeam_channel::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::ServiceEvent;

pub struct Debouncer {
    handle: Handle,
    tx: Sender<ServiceEvent>,
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(handle: Handle, tx: Sender<ServiceEvent>, delay: Duration) -> Self {
        Self {
            handle,
            tx,
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Cancel any pending timer and schedule a fresh one.
    ///
    /// Returns the generation of the new timer.
    pub fn replace(&mut self) -> u64 {
        self.abort_pending();
        self.generation += 1;

        let generation = self.generation;
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ServiceEvent::DebounceElapsed { generation }).is_err() {
                tracing::debug!("Debounce expired after its receiver was dropped");
            }
        }));

        generation
    }

    /// Cancel the pending timer, if any.
    ///
    /// An expiry already sent stays in the channel but its generation is no
    /// longer current.
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
    }

    /// Whether `generation` is the latest schedule and still live
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && generation == self.generation
    }

    /// Mark the current timer as consumed
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn abort_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("generation", &self.generation)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> (Debouncer, crossbeam_channel::Receiver<ServiceEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (
            Debouncer::new(Handle::current(), tx, Duration::from_millis(500)),
            rx,
        )
    }

    fn elapsed(rx: &crossbeam_channel::Receiver<ServiceEvent>) -> Vec<u64> {
        rx.try_iter()
            .filter_map(|event| match event {
                ServiceEvent::DebounceElapsed { generation } => Some(generation),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn replace_collapses_into_one_expiry() {
        let (mut debouncer, rx) = debouncer();

        debouncer.replace();
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.replace();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let last = debouncer.replace();

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(elapsed(&rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(elapsed(&rx), vec![last]);
        assert!(debouncer.finish(last));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_expiry() {
        let (mut debouncer, rx) = debouncer();

        let generation = debouncer.replace();
        debouncer.cancel();
        assert!(!debouncer.is_current(generation));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(elapsed(&rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_generation_is_not_current() {
        let (mut debouncer, _rx) = debouncer();

        let first = debouncer.replace();
        let second = debouncer.replace();

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        assert!(!debouncer.finish(first));
    }
}
