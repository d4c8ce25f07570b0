//! Active Filters
//!
//! Chip descriptors for everything currently narrowing the results, each with
//! the removal that reverses exactly that mutation.

use crate::domain::collection::CollectionKey;
use crate::domain::filter::{AxieClass, RangeFacet};
use crate::domain::part::PartAction;
use crate::state::FilterState;

/// What removing a chip undoes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRemoval {
    /// Unselect the part with this display key
    Part(String),
    Class(AxieClass),
    /// Reset the range to its full domain
    Range(RangeFacet),
    Collection(CollectionKey),
}

/// One chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub label: String,
    /// Excluded parts are rendered differently
    pub excluded: bool,
    pub removal: FilterRemoval,
}

impl ActiveFilter {
    fn new(label: impl Into<String>, removal: FilterRemoval) -> Self {
        Self {
            label: label.into(),
            excluded: false,
            removal,
        }
    }
}

/// Chips in display order: parts, classes, ranges, collections
pub fn active_filters(filters: &FilterState) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    for (key, part) in filters.parts.iter() {
        chips.push(ActiveFilter {
            label: key.clone(),
            excluded: part.action == PartAction::Exclude,
            removal: FilterRemoval::Part(key.clone()),
        });
    }

    for class in filters.classes.iter() {
        chips.push(ActiveFilter::new(class.as_str(), FilterRemoval::Class(*class)));
    }

    for facet in RangeFacet::ALL {
        if filters.is_range_active(facet) {
            let label = format!("{} {}", facet.label(), filters.range(facet).label());
            chips.push(ActiveFilter::new(label, FilterRemoval::Range(facet)));
        }
    }

    if let Some(special) = filters.collections.special() {
        chips.push(ActiveFilter::new(
            special.as_str(),
            FilterRemoval::Collection(CollectionKey::Special(special)),
        ));
    }
    for (collection, detail) in filters.collections.named() {
        let label = match detail.num_parts {
            Some(range) => format!("{} {}-{}", collection.as_str(), range.min, range.max),
            None => collection.as_str().to_string(),
        };
        chips.push(ActiveFilter::new(
            label,
            FilterRemoval::Collection(CollectionKey::Named(*collection)),
        ));
    }

    chips
}
