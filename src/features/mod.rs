//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and the logic local to it.

pub mod sales;
