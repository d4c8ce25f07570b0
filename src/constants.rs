//! Engine Constants
//!
//! Facet domains, defaults and service limits shared across the crate.

/// Number of sale records per list page
pub const PAGE_SIZE: u32 = 60;

/// Quiet period before a filter edit triggers a re-query
pub const DEBOUNCE_MS: u64 = 500;

/// Level range domain (also the "no filter" span)
pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 60;

/// Breed count range domain
pub const BREED_COUNT_MIN: u32 = 0;
pub const BREED_COUNT_MAX: u32 = 7;

/// Evolved parts count range domain
pub const EVOLVED_PARTS_MIN: u32 = 0;
pub const EVOLVED_PARTS_MAX: u32 = 6;

/// Part collection "number of parts" domain
pub const NUM_PARTS_MIN: u32 = 1;
pub const NUM_PARTS_MAX: u32 = 6;

/// Time window count bounds accepted by the service
pub const TIME_NUM_MIN: u32 = 1;
pub const TIME_NUM_MAX: u32 = 365;

/// Default time window count (unit defaults to days)
pub const DEFAULT_TIME_NUM: u32 = 1;

/// Default data service base URL
pub const DEFAULT_API_BASE_URL: &str = "https://dev.api.axieanalytics.com";

/// Request timeout for data service calls
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Data service endpoint paths
pub const OVERVIEW_PATH: &str = "/axies/graph/overview";
pub const LIST_PATH: &str = "/axies/list";
pub const PARTS_PATH: &str = "/axies/parts";

/// External links shown on sale cards
pub const TX_EXPLORER_URL: &str = "https://app.roninchain.com/tx/";
pub const MARKETPLACE_URL: &str = "https://app.axieinfinity.com/marketplace/axies/";
