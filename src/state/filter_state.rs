//! FilterState - Every Active Filter Facet
//!
//! Mutators return whether they changed anything so the controller only
//! schedules a re-query for real edits.

use hashlink::{LinkedHashMap, LinkedHashSet};

use crate::domain::collection::{Collection, CollectionDetail, CollectionKey, SpecialCollection};
use crate::domain::filter::{
    AxieClass, RangeDomain, RangeFacet, RangeFilter, SortBy, TimeUnit, TimeWindow,
};
use crate::error::{Error, Result};
use crate::state::part_catalog::PartSelection;

/// Special collection selection.
///
/// A sentinel and named collections can never be set at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSelection {
    special: Option<SpecialCollection>,
    named: LinkedHashMap<Collection, CollectionDetail>,
}

impl CollectionSelection {
    pub fn special(&self) -> Option<SpecialCollection> {
        self.special
    }

    /// Named collections in selection order
    pub fn named(&self) -> impl Iterator<Item = (&Collection, &CollectionDetail)> {
        self.named.iter()
    }

    pub fn contains(&self, collection: Collection) -> bool {
        self.named.contains_key(&collection)
    }

    pub fn get(&self, collection: Collection) -> Option<&CollectionDetail> {
        self.named.get(&collection)
    }

    pub fn is_empty(&self) -> bool {
        self.special.is_none() && self.named.is_empty()
    }

    /// Named collections can only be toggled while no sentinel is active
    pub fn toggles_enabled(&self) -> bool {
        self.special.is_none()
    }

    /// Turning a sentinel on replaces everything; turning it off clears everything
    pub fn set_special(&mut self, special: SpecialCollection, on: bool) -> bool {
        let before = self.clone();
        self.named.clear();
        self.special = on.then_some(special);
        *self != before
    }

    /// Add or remove a named collection; returns whether it is now selected
    pub fn toggle(&mut self, collection: Collection) -> Result<bool> {
        if let Some(sentinel) = self.special {
            return Err(Error::CollectionLocked {
                collection: collection.to_string(),
                sentinel: sentinel.to_string(),
            });
        }

        if self.named.remove(&collection).is_some() {
            return Ok(false);
        }

        let detail = CollectionDetail {
            num_parts: collection.is_parts().then(|| RangeDomain::NUM_PARTS.full()),
        };
        self.named.insert(collection, detail);
        Ok(true)
    }

    /// Edit the part-count range of a selected part collection
    pub fn edit_num_parts(&mut self, collection: Collection, candidate: [u32; 2]) -> bool {
        match self.named.get_mut(&collection).and_then(|d| d.num_parts.as_mut()) {
            Some(range) => range.apply_edit(candidate, RangeDomain::NUM_PARTS),
            None => false,
        }
    }

    /// Remove one chip
    pub fn remove(&mut self, key: CollectionKey) -> bool {
        match key {
            CollectionKey::Special(special) if self.special == Some(special) => {
                self.special = None;
                true
            }
            CollectionKey::Special(_) => false,
            CollectionKey::Named(collection) => self.named.remove(&collection).is_some(),
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        self.special = None;
        self.named.clear();
        changed
    }
}

/// All filter facets of the sales screen
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub time_window: TimeWindow,
    pub parts: PartSelection,
    pub classes: LinkedHashSet<AxieClass>,
    pub level: RangeFilter,
    pub breed_count: RangeFilter,
    pub evolved_parts: RangeFilter,
    pub collections: CollectionSelection,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            time_window: TimeWindow::default(),
            parts: PartSelection::new(),
            classes: LinkedHashSet::new(),
            level: RangeDomain::LEVEL.full(),
            breed_count: RangeDomain::BREED_COUNT.full(),
            evolved_parts: RangeDomain::EVOLVED_PARTS.full(),
            collections: CollectionSelection::default(),
            sort_by: SortBy::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time_window(&mut self, window: TimeWindow) -> bool {
        let window = TimeWindow::new(window.num, window.unit);
        let changed = self.time_window != window;
        self.time_window = window;
        changed
    }

    pub fn set_time_num(&mut self, num: u32) -> bool {
        self.set_time_window(TimeWindow::new(num, self.time_window.unit))
    }

    pub fn set_time_unit(&mut self, unit: TimeUnit) -> bool {
        self.set_time_window(TimeWindow::new(self.time_window.num, unit))
    }

    /// Add the class if absent, remove it if present
    pub fn toggle_class(&mut self, class: AxieClass) {
        if !self.classes.remove(&class) {
            self.classes.insert(class);
        }
    }

    pub fn remove_class(&mut self, class: AxieClass) -> bool {
        self.classes.remove(&class)
    }

    pub fn range(&self, facet: RangeFacet) -> RangeFilter {
        match facet {
            RangeFacet::Level => self.level,
            RangeFacet::BreedCount => self.breed_count,
            RangeFacet::EvolvedParts => self.evolved_parts,
        }
    }

    fn range_mut(&mut self, facet: RangeFacet) -> &mut RangeFilter {
        match facet {
            RangeFacet::Level => &mut self.level,
            RangeFacet::BreedCount => &mut self.breed_count,
            RangeFacet::EvolvedParts => &mut self.evolved_parts,
        }
    }

    /// Slider edit, see [`RangeFilter::apply_edit`]
    pub fn edit_range(&mut self, facet: RangeFacet, candidate: [u32; 2]) -> bool {
        self.range_mut(facet).apply_edit(candidate, facet.domain())
    }

    /// Whether a range is narrower than its domain
    pub fn is_range_active(&self, facet: RangeFacet) -> bool {
        self.range(facet) != facet.domain().full()
    }

    pub fn reset_range(&mut self, facet: RangeFacet) -> bool {
        let full = facet.domain().full();
        let range = self.range_mut(facet);
        let changed = *range != full;
        *range = full;
        changed
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) -> bool {
        let changed = self.sort_by != sort_by;
        self.sort_by = sort_by;
        changed
    }

    /// Reset every facet except parts (owned by the catalog) and sort order
    pub fn reset_facets(&mut self) {
        self.time_window = TimeWindow::default();
        self.classes.clear();
        for facet in RangeFacet::ALL {
            self.reset_range(facet);
        }
        self.collections.clear();
    }
}
