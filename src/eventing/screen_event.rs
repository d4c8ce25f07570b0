//! ScreenEvent - Sales Screen Change Notifications
//!
//! Sent by the controller to every subscriber after a mutation or an applied
//! service result. Subscribers re-read whatever they display.

/// Change notifications for the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Any filter facet changed (a re-query is scheduled)
    FiltersChanged,

    /// Overview aggregates replaced
    OverviewUpdated,

    /// Sale list replaced or cleared
    ListUpdated,

    /// Part catalog loaded
    PartsLoaded,

    /// Current page moved
    PageChanged { page: u32 },

    /// Sort order changed (the list is re-fetched immediately)
    SortChanged,

    /// A fetch failed; the message is also kept as the screen's last error
    Error { message: String },
}
