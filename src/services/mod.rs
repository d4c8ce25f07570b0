//! Service Layer
//!
//! The service layer wraps the remote data service and the debounce timer.
//! Everything asynchronous runs on tokio and reports back as `ServiceEvent`s.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  ServiceHub                  │
//! │  ┌──────────────────┐   ┌────────────────┐   │
//! │  │   DataService    │   │   Debouncer    │   │
//! │  │ (overview/list/  │   │ (filter-change │   │
//! │  │  part catalog)   │   │   re-query)    │   │
//! │  └──────────────────┘   └────────────────┘   │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼ ServiceEvent
//! ┌──────────────────────────────────────────────┐
//! │            FilterScreenController            │
//! └──────────────────────────────────────────────┘
//! ```

mod data_service;
mod debounce;
mod events;
mod hub;
mod runtime;

pub use data_service::*;
pub use debounce::*;
pub use events::*;
pub use hub::*;
pub use runtime::*;

#[cfg(test)]
pub(crate) use hub::mock;
