//! Service Hub
//!
//! Spawns data service calls on the tokio runtime and multiplexes their
//! results into a single `ServiceEvent` channel for the controller.

use crossbeam_channel::{Receiver, Sender};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::domain::query::{ListQuery, OverviewQuery};
use crate::error::Result;
use crate::services::{DataService, Debouncer, FetchKind, ServiceEvent};

/// Central hub for backend calls
#[derive(Clone)]
pub struct ServiceHub {
    service: Arc<dyn DataService>,
    handle: Handle,
    /// Event sender (for spawned tasks)
    tx: Sender<ServiceEvent>,
    /// Event receiver (for the controller)
    rx: Receiver<ServiceEvent>,
}

impl ServiceHub {
    pub fn new(service: Arc<dyn DataService>, handle: Handle) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            service,
            handle,
            tx,
            rx,
        }
    }

    /// Get the event receiver for the controller
    pub fn events(&self) -> Receiver<ServiceEvent> {
        self.rx.clone()
    }

    /// A debounce timer reporting on this hub's channel
    pub fn debouncer(&self, delay: Duration) -> Debouncer {
        Debouncer::new(self.handle.clone(), self.tx.clone(), delay)
    }

    // ==================== Fetches ====================

    pub fn fetch_overview(&self, seq: u64, query: OverviewQuery) {
        tracing::debug!(seq, "Fetching overview");
        let request = self.service.fetch_overview(query);
        self.spawn_fetch(FetchKind::Overview, seq, request, move |data| {
            ServiceEvent::OverviewLoaded { seq, data }
        });
    }

    pub fn fetch_list(&self, seq: u64, query: ListQuery) {
        tracing::debug!(seq, offset = query.offset, sort_by = ?query.sort_by, "Fetching list");
        let request = self.service.fetch_list(query);
        self.spawn_fetch(FetchKind::List, seq, request, move |records| {
            ServiceEvent::ListLoaded { seq, records }
        });
    }

    pub fn fetch_parts(&self, seq: u64) {
        tracing::debug!(seq, "Fetching part catalog");
        let request = self.service.fetch_parts();
        self.spawn_fetch(FetchKind::Parts, seq, request, |catalog| {
            ServiceEvent::PartsLoaded { catalog }
        });
    }

    fn spawn_fetch<T, F>(
        &self,
        kind: FetchKind,
        seq: u64,
        request: F,
        loaded: impl FnOnce(T) -> ServiceEvent + Send + 'static,
    ) where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let event = match request.await {
                Ok(value) => loaded(value),
                Err(e) => {
                    if e.is_fetch_error() {
                        tracing::error!(%kind, seq, "Fetch failed: {}", e);
                    } else {
                        tracing::warn!(%kind, seq, "Fetch aborted: {}", e);
                    }
                    let mut message = e.to_string();
                    if message.is_empty() {
                        message = kind.fallback_message().to_string();
                    }
                    ServiceEvent::FetchFailed { kind, seq, message }
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!(%kind, seq, "Fetch finished after the hub was dropped");
            }
        });
    }

    /// Emit a service event (mainly for testing)
    #[cfg(test)]
    pub fn emit(&self, event: ServiceEvent) {
        let _ = self.tx.send(event);
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("queued", &self.rx.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockService;
    use super::*;
    use crate::domain::filter::{RangeFilter, SortBy, TimeUnit};
    use crate::domain::query::PartBuckets;

    fn overview_query() -> OverviewQuery {
        let full = RangeFilter::new(0, 7).expect("range");
        OverviewQuery {
            time_unit: TimeUnit::Days,
            time_num: 1,
            include_parts: PartBuckets::default(),
            exclude_parts: PartBuckets::default(),
            axie_class: Vec::new(),
            level: full,
            breed_count: full,
            evolved_parts_count: full,
            collections: Vec::new(),
        }
    }

    #[tokio::test]
    async fn fetch_results_arrive_on_the_channel() {
        let service = Arc::new(MockService::with_total_sales(185));
        let hub = ServiceHub::new(service.clone(), Handle::current());

        hub.fetch_overview(1, overview_query());
        hub.fetch_list(
            2,
            ListQuery {
                filters: overview_query(),
                limit: 60,
                offset: 0,
                sort_by: SortBy::Latest,
            },
        );
        assert_eq!(service.overview_count(), 1);
        assert_eq!(service.list_count(), 1);

        let rx = hub.events();
        let mut overview_seen = false;
        let mut list_seen = false;
        for _ in 0..2 {
            let event = tokio::task::spawn_blocking({
                let rx = rx.clone();
                move || rx.recv_timeout(Duration::from_secs(1))
            })
            .await
            .expect("join")
            .expect("event");
            match event {
                ServiceEvent::OverviewLoaded { seq, data } => {
                    assert_eq!(seq, 1);
                    assert_eq!(data.total_sales, 185);
                    overview_seen = true;
                }
                ServiceEvent::ListLoaded { seq, .. } => {
                    assert_eq!(seq, 2);
                    list_seen = true;
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert!(overview_seen && list_seen);
    }

    #[tokio::test]
    async fn failures_become_fetch_failed_events() {
        let service = Arc::new(MockService::default());
        *service.fail_overview.lock().expect("lock") = true;
        let hub = ServiceHub::new(service, Handle::current());

        hub.fetch_overview(4, overview_query());
        let rx = hub.events();
        let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(1)))
            .await
            .expect("join")
            .expect("event");

        match event {
            ServiceEvent::FetchFailed { kind, seq, message } => {
                assert_eq!(kind, FetchKind::Overview);
                assert_eq!(seq, 4);
                assert!(message.contains("500"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
