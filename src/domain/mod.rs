//! Domain - Pure Data Structures and Protocol Types
//!
//! These types hold no runtime state and map one-to-one onto the data
//! service's request and response shapes.

pub mod collection;
pub mod config;
pub mod filter;
pub mod part;
pub mod query;
pub mod sale;
