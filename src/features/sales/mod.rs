//! Sales - Filtered Sales Screen
//!
//! The controller plus the pure helpers it renders queries and chips with.

pub mod active_filters;
pub mod controller;
pub mod query_builder;

pub use active_filters::{ActiveFilter, FilterRemoval};
pub use controller::FilterScreenController;
