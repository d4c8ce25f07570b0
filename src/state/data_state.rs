//! DataState - Overview and List View Models
//!
//! Each slot remembers the newest fetch issued and the newest one applied, so
//! a late response from a superseded request never overwrites fresher data.

use crate::domain::sale::{OverviewData, SaleRecord};
use crate::services::FetchKind;

/// Sequence bookkeeping for one view-model slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    issued: u64,
    applied: u64,
    loading: bool,
}

impl Slot {
    fn begin(&mut self, seq: u64) {
        self.issued = self.issued.max(seq);
        self.loading = true;
    }

    /// Accept a response stamped `seq` unless a newer one was already applied
    fn accept(&mut self, seq: u64) -> bool {
        if seq < self.applied {
            return false;
        }
        self.applied = seq;
        if seq >= self.issued {
            self.loading = false;
        }
        true
    }

    fn settle(&mut self, seq: u64) {
        if seq >= self.issued {
            self.loading = false;
        }
    }
}

/// Results shown by the sales screen
#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub overview: OverviewData,
    pub list: Vec<SaleRecord>,
    /// Most recent fetch failure, kept until dismissed
    pub last_error: Option<String>,
    overview_slot: Slot,
    list_slot: Slot,
    parts_loading: bool,
}

impl DataState {
    /// Mark a fetch of `kind` stamped `seq` as in flight
    pub fn begin(&mut self, kind: FetchKind, seq: u64) {
        match kind {
            FetchKind::Overview => self.overview_slot.begin(seq),
            FetchKind::List => self.list_slot.begin(seq),
            FetchKind::Parts => self.parts_loading = true,
        }
    }

    pub fn is_loading(&self, kind: FetchKind) -> bool {
        match kind {
            FetchKind::Overview => self.overview_slot.loading,
            FetchKind::List => self.list_slot.loading,
            FetchKind::Parts => self.parts_loading,
        }
    }

    /// Whether any fetch is still in flight
    pub fn is_busy(&self) -> bool {
        self.overview_slot.loading || self.list_slot.loading || self.parts_loading
    }

    /// Returns false when the response is stale and was dropped
    pub fn apply_overview(&mut self, seq: u64, data: OverviewData) -> bool {
        if !self.overview_slot.accept(seq) {
            return false;
        }
        self.overview = data;
        true
    }

    /// Returns false when the response is stale and was dropped
    pub fn apply_list(&mut self, seq: u64, records: Vec<SaleRecord>) -> bool {
        if !self.list_slot.accept(seq) {
            return false;
        }
        self.list = records;
        true
    }

    pub fn parts_loaded(&mut self) {
        self.parts_loading = false;
    }

    /// Record a failure; the slot keeps whatever data it already had
    pub fn fail(&mut self, kind: FetchKind, seq: u64, message: String) {
        match kind {
            FetchKind::Overview => self.overview_slot.settle(seq),
            FetchKind::List => self.list_slot.settle(seq),
            FetchKind::Parts => self.parts_loading = false,
        }
        self.last_error = Some(message);
    }

    pub fn clear_list(&mut self) {
        self.list.clear();
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}
