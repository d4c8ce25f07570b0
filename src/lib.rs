//! Axie Sales Library
//!
//! Filter and query synchronization engine for the axie sales analytics
//! screen: part catalog, filter facets, query rendering, debounced
//! re-querying and pagination against the remote analytics API.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{Error, Result};
pub use features::sales::FilterScreenController;
