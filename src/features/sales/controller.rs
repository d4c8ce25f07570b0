//! Sales Screen Controller
//!
//! Owns the filter state, the part catalog, pagination and both result view
//! models, and decides when the data service is queried:
//!
//! - mount: overview, list and part catalog, immediately
//! - filter edit: one overview + list pair after the debounce quiet period,
//!   with the page reset to 1
//! - page or sort change: the list, immediately
//!
//! All mutation happens on the caller's thread. Service results are applied
//! by `process_events`/`wait_and_process`.

use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;

use crate::constants::{TIME_NUM_MAX, TIME_NUM_MIN};
use crate::domain::collection::{Collection, CollectionKey, SpecialCollection};
use crate::domain::config::SyncConfig;
use crate::domain::filter::{
    AxieClass, RangeDomain, RangeEndpoint, RangeFacet, RangeFilter, SortBy, TimeUnit, TimeWindow,
};
use crate::domain::part::{PartAction, PartEntry, PartGroup, PartId, PartType};
use crate::domain::sale::{OverviewData, SaleRecord};
use crate::error::{Error, Result};
use crate::eventing::ScreenEvent;
use crate::features::sales::active_filters::{ActiveFilter, FilterRemoval, active_filters};
use crate::features::sales::query_builder::{build_list_query, build_overview_query};
use crate::services::{Debouncer, FetchKind, ServiceEvent, ServiceHub};
use crate::state::{DataState, FilterState, NumberInput, PageLink, PageState, PartCatalog};

/// Controller for one mounted sales screen
pub struct FilterScreenController {
    hub: ServiceHub,
    events: Receiver<ServiceEvent>,
    debouncer: Debouncer,
    filters: FilterState,
    catalog: PartCatalog,
    page: PageState,
    data: DataState,
    /// Set by `mount`; edits before it schedule nothing
    initialized: bool,
    /// Last sequence number handed to a fetch
    seq: u64,
    listeners: Vec<Sender<ScreenEvent>>,
}

impl FilterScreenController {
    pub fn new(hub: ServiceHub, sync: &SyncConfig) -> Self {
        Self {
            events: hub.events(),
            debouncer: hub.debouncer(sync.debounce()),
            hub,
            filters: FilterState::new(),
            catalog: PartCatalog::new(),
            page: PageState::new(sync.page_size),
            data: DataState::default(),
            initialized: false,
            seq: 0,
            listeners: Vec::new(),
        }
    }

    // ==================== Lifecycle ====================

    /// Issue the initial loads
    pub fn mount(&mut self) {
        if self.initialized {
            tracing::warn!("Sales screen already mounted");
            return;
        }
        tracing::info!("Mounting sales screen");
        self.initialized = true;
        self.fetch_overview();
        self.fetch_list();
        self.fetch_parts();
    }

    /// Cancel the pending re-query; later edits schedule nothing until mounted again
    pub fn unmount(&mut self) {
        if !self.initialized {
            return;
        }
        tracing::info!("Unmounting sales screen");
        self.debouncer.cancel();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Receive a `ScreenEvent` for every change from now on
    pub fn subscribe(&mut self) -> Receiver<ScreenEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.listeners.push(tx);
        rx
    }

    /// Apply every service event already queued; returns how many were applied
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Block up to `timeout` for the next service event, then drain the queue
    pub fn wait_and_process(&mut self, timeout: Duration) -> usize {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_event(event);
                1 + self.process_events()
            }
            Err(_) => 0,
        }
    }

    fn apply_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::OverviewLoaded { seq, data } => {
                if self.data.apply_overview(seq, data) {
                    self.notify(ScreenEvent::OverviewUpdated);
                } else {
                    tracing::debug!(seq, "Discarding stale overview");
                }
            }

            ServiceEvent::ListLoaded { seq, records } => {
                if self.data.apply_list(seq, records) {
                    self.notify(ScreenEvent::ListUpdated);
                } else {
                    tracing::debug!(seq, "Discarding stale list");
                }
            }

            ServiceEvent::PartsLoaded { catalog } => {
                tracing::info!("Part catalog loaded ({} attributes)", catalog.len());
                self.catalog.load(catalog, &self.filters.parts);
                self.data.parts_loaded();
                self.notify(ScreenEvent::PartsLoaded);
            }

            ServiceEvent::FetchFailed { kind, seq, message } => {
                self.data.fail(kind, seq, message.clone());
                self.notify(ScreenEvent::Error { message });
            }

            ServiceEvent::DebounceElapsed { generation } => {
                if !self.debouncer.finish(generation) {
                    tracing::debug!(generation, "Ignoring superseded debounce expiry");
                    return;
                }
                self.requery();
            }
        }
    }

    /// Debounced re-query after filter edits
    fn requery(&mut self) {
        if self.page.reset() {
            self.notify(ScreenEvent::PageChanged { page: 1 });
        }
        self.fetch_list();
        self.fetch_overview();
    }

    // ==================== Fetches ====================

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn fetch_overview(&mut self) {
        let seq = self.next_seq();
        self.data.begin(FetchKind::Overview, seq);
        self.hub.fetch_overview(seq, build_overview_query(&self.filters));
    }

    fn fetch_list(&mut self) {
        let seq = self.next_seq();
        self.data.begin(FetchKind::List, seq);
        self.hub.fetch_list(seq, build_list_query(&self.filters, &self.page));
    }

    fn fetch_parts(&mut self) {
        let seq = self.next_seq();
        self.data.begin(FetchKind::Parts, seq);
        self.hub.fetch_parts(seq);
    }

    fn notify(&mut self, event: ScreenEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Every filter edit ends here
    fn filters_changed(&mut self) {
        self.notify(ScreenEvent::FiltersChanged);
        if self.initialized {
            let generation = self.debouncer.replace();
            tracing::trace!(generation, "Re-query scheduled");
        }
    }

    fn changed(&mut self, changed: bool) -> bool {
        if changed {
            self.filters_changed();
        }
        changed
    }

    // ==================== Parts ====================

    /// Select `entries` of one attribute; returns how many were newly selected
    pub fn select_part(
        &mut self,
        part_name: &str,
        part_type: PartType,
        entries: &[PartEntry],
        action: PartAction,
    ) -> usize {
        let moved = self
            .catalog
            .select_part(&mut self.filters.parts, part_name, part_type, entries, action);
        self.changed(moved > 0);
        moved
    }

    pub fn select_all_stages(&mut self, part_name: &str, action: PartAction) -> usize {
        let moved = self
            .catalog
            .select_all_stages(&mut self.filters.parts, part_name, action);
        self.changed(moved > 0);
        moved
    }

    pub fn select_stage(&mut self, part_name: &str, id: &PartId, action: PartAction) -> bool {
        let selected = self
            .catalog
            .select_stage(&mut self.filters.parts, part_name, id, action);
        self.changed(selected)
    }

    /// Unselect by display key; no-op if absent
    pub fn unselect_part(&mut self, key: &str) -> bool {
        let removed = self.catalog.unselect_part(&mut self.filters.parts, key).is_some();
        self.changed(removed)
    }

    pub fn clear_parts(&mut self) -> bool {
        let had_parts = !self.filters.parts.is_empty();
        self.catalog.clear_parts(&mut self.filters.parts);
        self.changed(had_parts)
    }

    /// Attributes still selectable whose name starts with `prefix`
    pub fn search_parts<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a PartGroup)> + use<'a> {
        self.catalog.search(prefix)
    }

    // ==================== Classes ====================

    pub fn toggle_class(&mut self, class: AxieClass) {
        self.filters.toggle_class(class);
        self.filters_changed();
    }

    // ==================== Time Window ====================

    pub fn set_time_window(&mut self, window: TimeWindow) -> bool {
        let changed = self.filters.set_time_window(window);
        self.changed(changed)
    }

    pub fn set_time_num(&mut self, num: u32) -> bool {
        let changed = self.filters.set_time_num(num);
        self.changed(changed)
    }

    pub fn set_time_unit(&mut self, unit: TimeUnit) -> bool {
        let changed = self.filters.set_time_unit(unit);
        self.changed(changed)
    }

    /// Commit the time-count text box
    pub fn commit_time_count_text(&mut self, text: &str) -> Result<bool> {
        let input = NumberInput::new(self.filters.time_window.num, TIME_NUM_MIN, TIME_NUM_MAX);
        let num = commit_text(input, text)?;
        Ok(self.set_time_num(num))
    }

    // ==================== Ranges ====================

    pub fn edit_range(&mut self, facet: RangeFacet, candidate: [u32; 2]) -> bool {
        let changed = self.filters.edit_range(facet, candidate);
        if !changed {
            tracing::debug!(?facet, ?candidate, "Range edit left {:?} unchanged", self.filters.range(facet));
        }
        self.changed(changed)
    }

    pub fn reset_range(&mut self, facet: RangeFacet) -> bool {
        let changed = self.filters.reset_range(facet);
        self.changed(changed)
    }

    /// Commit one endpoint's text box.
    ///
    /// The value is clamped between the domain edge and the other endpoint.
    pub fn commit_range_text(&mut self, facet: RangeFacet, endpoint: RangeEndpoint, text: &str) -> Result<bool> {
        let current = self.filters.range(facet);
        let value = commit_text(endpoint_input(current, endpoint, facet.domain()), text)?;
        Ok(self.edit_range(facet, with_endpoint(current, endpoint, value)))
    }

    // ==================== Collections ====================

    pub fn toggle_special_collection(&mut self, special: SpecialCollection, on: bool) -> bool {
        let changed = self.filters.collections.set_special(special, on);
        self.changed(changed)
    }

    /// Toggle a named collection; returns whether it is now selected
    pub fn toggle_collection(&mut self, collection: Collection) -> Result<bool> {
        match self.filters.collections.toggle(collection) {
            Ok(selected) => {
                self.filters_changed();
                Ok(selected)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn edit_collection_parts(&mut self, collection: Collection, candidate: [u32; 2]) -> bool {
        let changed = self.filters.collections.edit_num_parts(collection, candidate);
        self.changed(changed)
    }

    /// Commit one endpoint of a selected part collection's part-count box
    pub fn commit_collection_parts_text(
        &mut self,
        collection: Collection,
        endpoint: RangeEndpoint,
        text: &str,
    ) -> Result<bool> {
        let current = self
            .filters
            .collections
            .get(collection)
            .and_then(|detail| detail.num_parts)
            .ok_or_else(|| Error::Invalid {
                message: format!("{collection} has no part count to edit"),
            })?;
        let value = commit_text(endpoint_input(current, endpoint, RangeDomain::NUM_PARTS), text)?;
        Ok(self.edit_collection_parts(collection, with_endpoint(current, endpoint, value)))
    }

    /// Whether named collection widgets are enabled (no sentinel selected)
    pub fn collection_toggles_enabled(&self) -> bool {
        self.filters.collections.toggles_enabled()
    }

    // ==================== Sort & Pages ====================

    /// Change the list order; the list is re-fetched at once
    pub fn set_sort_by(&mut self, sort_by: SortBy) -> bool {
        if !self.filters.set_sort_by(sort_by) {
            return false;
        }
        self.notify(ScreenEvent::SortChanged);
        if self.initialized {
            self.fetch_list();
        }
        true
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages(self.data.overview.total_sales)
    }

    /// Navigate to `page`; rejected outside `1..=total_pages`
    pub fn request_page(&mut self, page: u32) -> bool {
        let total = self.total_pages();
        if !self.page.request(page, total) {
            tracing::warn!("Rejected page {} of {}", page, total);
            return false;
        }

        self.data.clear_list();
        self.notify(ScreenEvent::ListUpdated);
        self.notify(ScreenEvent::PageChanged { page });
        if self.initialized {
            self.fetch_list();
        }
        true
    }

    pub fn page_window(&self) -> Vec<PageLink> {
        self.page.window(self.total_pages())
    }

    // ==================== Summary ====================

    /// Reset every facet except the sort order
    pub fn clear_all(&mut self) -> bool {
        let before = self.filters.clone();
        self.filters.reset_facets();
        self.catalog.clear_parts(&mut self.filters.parts);
        let changed = self.filters != before;
        self.changed(changed)
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        active_filters(&self.filters)
    }

    /// Undo the mutation behind one chip
    pub fn remove_filter(&mut self, removal: &FilterRemoval) -> bool {
        match removal {
            FilterRemoval::Part(key) => self.unselect_part(key),
            FilterRemoval::Class(class) => {
                let removed = self.filters.remove_class(*class);
                self.changed(removed)
            }
            FilterRemoval::Range(facet) => self.reset_range(*facet),
            FilterRemoval::Collection(key) => {
                let removed = self.filters.collections.remove(*key);
                self.changed(removed)
            }
        }
    }

    /// Remove a named collection chip
    pub fn remove_collection(&mut self, collection: Collection) -> bool {
        self.remove_filter(&FilterRemoval::Collection(CollectionKey::Named(collection)))
    }

    // ==================== Getters ====================

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    pub fn page(&self) -> u32 {
        self.page.page()
    }

    pub fn data(&self) -> &DataState {
        &self.data
    }

    pub fn overview(&self) -> &OverviewData {
        &self.data.overview
    }

    pub fn list(&self) -> &[SaleRecord] {
        &self.data.list
    }

    pub fn last_error(&self) -> Option<&str> {
        self.data.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.data.dismiss_error();
    }

    /// Whether any fetch is still in flight
    pub fn is_busy(&self) -> bool {
        self.data.is_busy()
    }
}

impl std::fmt::Debug for FilterScreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterScreenController")
            .field("initialized", &self.initialized)
            .field("page", &self.page.page())
            .field("seq", &self.seq)
            .field("debouncer", &self.debouncer)
            .finish()
    }
}

/// Text box for one endpoint, bounded by the domain edge and the other endpoint
fn endpoint_input(current: RangeFilter, endpoint: RangeEndpoint, domain: RangeDomain) -> NumberInput {
    match endpoint {
        RangeEndpoint::Min => NumberInput::new(current.min, domain.lo, current.max),
        RangeEndpoint::Max => NumberInput::new(current.max, current.min, domain.hi),
    }
}

fn with_endpoint(current: RangeFilter, endpoint: RangeEndpoint, value: u32) -> [u32; 2] {
    match endpoint {
        RangeEndpoint::Min => [value, current.max],
        RangeEndpoint::Max => [current.min, value],
    }
}

fn commit_text(mut input: NumberInput, text: &str) -> Result<u32> {
    let text = text.trim();
    let committed = if input.input(text) { input.commit() } else { None };
    committed.ok_or_else(|| {
        tracing::warn!("Rejected numeric text {:?}", text);
        Error::Invalid {
            message: format!("'{text}' is not a number"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockService, sample_record};
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn controller(service: &Arc<MockService>) -> FilterScreenController {
        let hub = ServiceHub::new(service.clone(), Handle::current());
        FilterScreenController::new(hub, &SyncConfig::default())
    }

    /// Let spawned fetches run and apply whatever they sent
    async fn settle(controller: &mut FilterScreenController) {
        for _ in 0..4 {
            tokio::task::yield_now().await;
            controller.process_events();
        }
    }

    async fn mounted(service: &Arc<MockService>) -> FilterScreenController {
        let mut controller = controller(service);
        controller.mount();
        settle(&mut controller).await;
        controller
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[tokio::test(start_paused = true)]
    async fn mount_loads_everything_once() {
        let service = Arc::new(MockService::with_total_sales(185));
        let mut controller = mounted(&service).await;
        controller.mount();
        settle(&mut controller).await;

        assert_eq!(service.overview_count(), 1);
        assert_eq!(service.list_count(), 1);
        assert_eq!(*service.parts_calls.lock().expect("lock"), 1);
        assert!(controller.catalog().is_loaded());
        assert_eq!(controller.overview().total_sales, 185);
        assert!(!controller.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_collapse_into_one_requery() {
        let service = Arc::new(MockService::with_total_sales(185));
        let mut controller = mounted(&service).await;

        controller.toggle_class(AxieClass::Bird);
        tokio::time::sleep(ms(100)).await;
        controller.edit_range(RangeFacet::Level, [10, 60]);
        tokio::time::sleep(ms(100)).await;
        controller.set_time_unit(TimeUnit::Hours);

        tokio::time::sleep(ms(499)).await;
        settle(&mut controller).await;
        assert_eq!(service.overview_count(), 1);
        assert_eq!(service.list_count(), 1);

        tokio::time::sleep(ms(2)).await;
        settle(&mut controller).await;
        assert_eq!(service.overview_count(), 2);
        assert_eq!(service.list_count(), 2);

        let overview = service.last_overview().expect("overview");
        assert_eq!(overview.axie_class, vec![AxieClass::Bird]);
        assert_eq!(overview.time_unit, TimeUnit::Hours);
    }

    #[tokio::test(start_paused = true)]
    async fn filter_edit_resets_page_inside_debounce() {
        let service = Arc::new(MockService::with_total_sales(185));
        let mut controller = mounted(&service).await;

        assert!(controller.request_page(3));
        assert_eq!(service.list_count(), 2);
        assert_eq!(service.last_list().expect("list").offset, 120);

        controller.toggle_class(AxieClass::Mech);
        assert_eq!(controller.page(), 3);

        tokio::time::sleep(ms(501)).await;
        settle(&mut controller).await;

        assert_eq!(controller.page(), 1);
        assert_eq!(service.list_count(), 3);
        assert_eq!(service.overview_count(), 2);
        assert_eq!(service.last_list().expect("list").offset, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn page_requests_are_bounded_by_total_sales() {
        let service = Arc::new(MockService::with_total_sales(185));
        *service.list_records.lock().expect("lock") = vec![sample_record(1), sample_record(2)];
        let mut controller = mounted(&service).await;
        assert_eq!(controller.total_pages(), 4);
        assert_eq!(controller.list().len(), 2);

        assert!(!controller.request_page(5));
        assert!(!controller.request_page(0));
        assert_eq!(service.list_count(), 1);
        assert_eq!(controller.list().len(), 2);

        let events = controller.subscribe();
        assert!(controller.request_page(4));
        assert!(controller.list().is_empty());
        assert_eq!(service.list_count(), 2);
        assert_eq!(service.last_list().expect("list").offset, 180);
        assert_eq!(
            events.try_iter().collect::<Vec<_>>(),
            vec![ScreenEvent::ListUpdated, ScreenEvent::PageChanged { page: 4 }]
        );

        settle(&mut controller).await;
        assert_eq!(controller.list().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn sort_change_fetches_list_immediately() {
        let service = Arc::new(MockService::with_total_sales(185));
        let mut controller = mounted(&service).await;
        controller.request_page(2);

        assert!(controller.set_sort_by(SortBy::HighestPrice));
        assert!(!controller.set_sort_by(SortBy::HighestPrice));

        assert_eq!(service.list_count(), 3);
        assert_eq!(service.overview_count(), 1);
        let list = service.last_list().expect("list");
        assert_eq!(list.sort_by, SortBy::HighestPrice);
        assert_eq!(list.offset, 60);

        tokio::time::sleep(ms(1000)).await;
        settle(&mut controller).await;
        assert_eq!(service.list_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn edits_before_mount_schedule_nothing() {
        let service = Arc::new(MockService::default());
        let mut controller = controller(&service);
        let events = controller.subscribe();

        controller.toggle_class(AxieClass::Dawn);
        tokio::time::sleep(ms(1000)).await;
        settle(&mut controller).await;

        assert_eq!(service.overview_count(), 0);
        assert_eq!(service.list_count(), 0);
        assert_eq!(events.try_recv().ok(), Some(ScreenEvent::FiltersChanged));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_pending_requery() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        controller.toggle_class(AxieClass::Bug);
        controller.unmount();
        tokio::time::sleep(ms(1000)).await;
        settle(&mut controller).await;

        assert_eq!(service.overview_count(), 1);
        assert_eq!(service.list_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_op_edits_do_not_requery() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;
        let events = controller.subscribe();

        assert!(!controller.unselect_part("Nope-1"));
        assert!(!controller.edit_range(RangeFacet::Level, [1, 60]));
        assert!(!controller.set_time_num(1));
        tokio::time::sleep(ms(1000)).await;
        settle(&mut controller).await;

        assert_eq!(service.overview_count(), 1);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_overview_never_overwrites_newer() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        controller.hub.emit(ServiceEvent::OverviewLoaded {
            seq: 100,
            data: OverviewData {
                total_sales: 50,
                ..OverviewData::default()
            },
        });
        controller.hub.emit(ServiceEvent::OverviewLoaded {
            seq: 99,
            data: OverviewData {
                total_sales: 20,
                ..OverviewData::default()
            },
        });
        controller.process_events();

        assert_eq!(controller.overview().total_sales, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn overview_failure_leaves_list_applied() {
        let service = Arc::new(MockService::with_total_sales(185));
        *service.fail_overview.lock().expect("lock") = true;
        let mut controller = controller(&service);
        let events = controller.subscribe();
        controller.mount();
        settle(&mut controller).await;

        assert!(controller.last_error().is_some_and(|m| m.contains("500")));
        assert!(!controller.data().is_loading(FetchKind::List));
        assert!(!controller.data().is_loading(FetchKind::Overview));
        assert_eq!(controller.overview().total_sales, 0);
        assert!(events.try_iter().any(|e| e == ScreenEvent::ListUpdated));

        // Edits keep working after a failure
        controller.toggle_class(AxieClass::Beast);
        tokio::time::sleep(ms(501)).await;
        settle(&mut controller).await;
        assert_eq!(service.overview_count(), 2);
        assert_eq!(service.list_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn parts_flow_through_catalog_into_query() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        assert!(controller.select_stage("Sleepless", &PartId::Number(7), PartAction::Include));
        assert_eq!(controller.select_all_stages("Imp", PartAction::Exclude), 1);
        let names: Vec<&str> = controller.search_parts("").map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Sleepless"]);

        tokio::time::sleep(ms(501)).await;
        settle(&mut controller).await;

        let overview = service.last_overview().expect("overview");
        assert_eq!(overview.include_parts.eyes, vec![PartId::Number(7)]);
        assert_eq!(overview.exclude_parts.horn, vec![PartId::Number(3)]);

        assert!(controller.clear_parts());
        assert_eq!(controller.search_parts("").count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn locked_collection_toggle_is_an_error() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        controller.toggle_collection(Collection::Mystic).expect("toggle");
        assert!(controller.toggle_special_collection(SpecialCollection::Any, true));
        assert!(!controller.collection_toggles_enabled());

        let err = controller.toggle_collection(Collection::Shiny).expect_err("locked");
        assert!(matches!(err, Error::CollectionLocked { .. }));
        assert_eq!(controller.filters().collections.special(), Some(SpecialCollection::Any));
    }

    #[tokio::test(start_paused = true)]
    async fn text_commits_parse_and_clamp() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        let err = controller
            .commit_range_text(RangeFacet::Level, RangeEndpoint::Min, "2x")
            .expect_err("invalid");
        assert!(matches!(err, Error::Invalid { .. }));

        assert!(controller
            .commit_range_text(RangeFacet::Level, RangeEndpoint::Min, "20")
            .expect("commit"));
        assert!(!controller
            .commit_range_text(RangeFacet::Level, RangeEndpoint::Max, "75")
            .expect("commit"));
        assert_eq!(controller.filters().level.min, 20);
        assert_eq!(controller.filters().level.max, 60);

        assert!(controller.commit_time_count_text("900").expect("commit"));
        assert_eq!(controller.filters().time_window.num, 365);
        assert!(controller.commit_time_count_text("").is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn endpoint_text_is_pinned_by_the_other_endpoint() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;
        controller.edit_range(RangeFacet::Level, [10, 40]);

        assert!(controller
            .commit_range_text(RangeFacet::Level, RangeEndpoint::Min, "50")
            .expect("commit"));
        assert_eq!(controller.filters().level, RangeFilter { min: 40, max: 40 });

        controller.edit_range(RangeFacet::Level, [10, 40]);
        assert!(controller
            .commit_range_text(RangeFacet::Level, RangeEndpoint::Max, "5")
            .expect("commit"));
        assert_eq!(controller.filters().level, RangeFilter { min: 10, max: 10 });
    }

    #[tokio::test(start_paused = true)]
    async fn collection_part_count_text_commits() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        let err = controller
            .commit_collection_parts_text(Collection::Japan, RangeEndpoint::Min, "3")
            .expect_err("not selected");
        assert!(matches!(err, Error::Invalid { .. }));

        assert!(controller.toggle_collection(Collection::Japan).expect("toggle"));
        controller.edit_collection_parts(Collection::Japan, [2, 4]);

        assert!(controller
            .commit_collection_parts_text(Collection::Japan, RangeEndpoint::Min, "6")
            .expect("commit"));
        assert!(controller
            .commit_collection_parts_text(Collection::Japan, RangeEndpoint::Max, "9")
            .expect("commit"));
        let num_parts = controller
            .filters()
            .collections
            .get(Collection::Japan)
            .and_then(|detail| detail.num_parts);
        assert_eq!(num_parts, RangeFilter::new(4, 6));

        assert!(controller
            .commit_collection_parts_text(Collection::Japan, RangeEndpoint::Max, "x")
            .is_err());
        assert!(controller
            .commit_collection_parts_text(Collection::MeoCorp, RangeEndpoint::Max, "2")
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn chips_remove_what_they_describe() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        controller.edit_range(RangeFacet::BreedCount, [2, 5]);
        controller.toggle_class(AxieClass::Reptile);
        controller.toggle_collection(Collection::Origin).expect("toggle");

        let chips = controller.active_filters();
        assert_eq!(chips.len(), 3);
        for chip in chips {
            assert!(controller.remove_filter(&chip.removal));
        }
        assert!(controller.active_filters().is_empty());
        assert!(!controller.remove_collection(Collection::Origin));
    }

    #[tokio::test(start_paused = true)]
    async fn clear_all_keeps_sort_order() {
        let service = Arc::new(MockService::default());
        let mut controller = mounted(&service).await;

        controller.set_sort_by(SortBy::LowestLevel);
        controller.select_stage("Sleepless", &PartId::Number(8), PartAction::Exclude);
        controller.set_time_window(TimeWindow::new(3, TimeUnit::Hours));

        assert!(controller.clear_all());
        assert!(!controller.clear_all());

        assert_eq!(controller.filters().sort_by, SortBy::LowestLevel);
        assert_eq!(controller.filters().time_window, TimeWindow::default());
        assert!(controller.filters().parts.is_empty());
        assert_eq!(
            controller.catalog().group("Sleepless").map(|g| g.parts_ids.len()),
            Some(2)
        );
    }
}
