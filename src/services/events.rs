//! Service Events
//!
//! Events emitted by the service layer to be consumed by the screen
//! controller. Fetch results and timer expiry all arrive on this one channel.

use crate::domain::part::PartCatalogData;
use crate::domain::sale::{OverviewData, SaleRecord};

/// Which remote fetch an event belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Overview,
    List,
    Parts,
}

impl FetchKind {
    /// Message shown when a failure carries no description of its own
    pub fn fallback_message(&self) -> &'static str {
        match self {
            FetchKind::Overview => "An error occured while fetching overview data.",
            FetchKind::List => "An error occured while fetching the list of axies.",
            FetchKind::Parts => "An error occurred while fetching parts.",
        }
    }
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FetchKind::Overview => "overview",
            FetchKind::List => "list",
            FetchKind::Parts => "parts",
        };
        f.write_str(name)
    }
}

/// Events emitted by the service layer
#[derive(Clone, Debug)]
pub enum ServiceEvent {
    // ==================== Fetch Results ====================
    /// Overview aggregates arrived
    OverviewLoaded {
        /// Sequence number stamped when the fetch was issued
        seq: u64,
        data: OverviewData,
    },

    /// One page of sale records arrived
    ListLoaded { seq: u64, records: Vec<SaleRecord> },

    /// The part catalog arrived
    PartsLoaded { catalog: PartCatalogData },

    /// A fetch failed
    FetchFailed {
        kind: FetchKind,
        seq: u64,
        /// Human readable description
        message: String,
    },

    // ==================== Timers ====================
    /// The debounce timer scheduled as `generation` expired
    DebounceElapsed { generation: u64 },
}
