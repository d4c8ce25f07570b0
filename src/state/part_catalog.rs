//! PartCatalog - Available Parts Pool and Pristine Original
//!
//! Every catalog entry lives in exactly one place: the pool of its attribute,
//! or the `PartSelection`. Selecting moves an entry out of the pool,
//! unselecting moves it back (re-sorted by stage), and clearing restores the
//! pool from the copy taken when the catalog was loaded.

use hashlink::LinkedHashMap;

use crate::domain::part::{
    PartAction, PartCatalogData, PartEntry, PartGroup, PartId, PartType, SelectedPart, display_key,
};

/// Active part selections keyed by display key, in selection order
pub type PartSelection = LinkedHashMap<String, SelectedPart>;

/// Selectable parts, split from the selection
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    /// Entries still available for selection
    pool: PartCatalogData,
    /// Catalog as fetched, restored by `clear_parts`
    original: PartCatalogData,
    loaded: bool,
}

impl PartCatalog {
    /// Create an empty, not yet loaded catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched catalog as both pool and original.
    ///
    /// Entries already present in `selection` stay out of the pool.
    pub fn load(&mut self, catalog: PartCatalogData, selection: &PartSelection) {
        self.pool = catalog.clone();
        self.original = catalog;
        self.loaded = true;

        for part in selection.values() {
            if let Some(group) = self.pool.get_mut(&part.part_name) {
                group.parts_ids.retain(|p| p.id != part.id);
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Available entries per attribute
    pub fn pool(&self) -> &PartCatalogData {
        &self.pool
    }

    pub fn group(&self, part_name: &str) -> Option<&PartGroup> {
        self.pool.get(part_name)
    }

    /// Move entries of `part_name` into `selection` with `action`.
    ///
    /// An entry whose display key is already selected is skipped and stays
    /// where it is, so the first action wins. Returns how many were moved.
    pub fn select_part(
        &mut self,
        selection: &mut PartSelection,
        part_name: &str,
        part_type: PartType,
        entries: &[PartEntry],
        action: PartAction,
    ) -> usize {
        let mut moved = 0;

        for entry in entries {
            let key = display_key(part_name, entry.stage);
            if selection.contains_key(&key) {
                continue;
            }

            selection.insert(
                key,
                SelectedPart {
                    part_name: part_name.to_string(),
                    part_type,
                    id: entry.id.clone(),
                    stage: entry.stage,
                    action,
                },
            );
            if let Some(group) = self.pool.get_mut(part_name) {
                group.parts_ids.retain(|p| p.id != entry.id);
            }
            moved += 1;
        }

        moved
    }

    /// Select every entry still available for `part_name`
    pub fn select_all_stages(
        &mut self,
        selection: &mut PartSelection,
        part_name: &str,
        action: PartAction,
    ) -> usize {
        let Some(group) = self.pool.get(part_name) else {
            return 0;
        };
        let part_type = group.part_type;
        let entries = group.parts_ids.clone();
        self.select_part(selection, part_name, part_type, &entries, action)
    }

    /// Select the single entry `id` of `part_name`
    pub fn select_stage(
        &mut self,
        selection: &mut PartSelection,
        part_name: &str,
        id: &PartId,
        action: PartAction,
    ) -> bool {
        let Some(group) = self.pool.get(part_name) else {
            return false;
        };
        let part_type = group.part_type;
        let Some(entry) = group.parts_ids.iter().find(|p| &p.id == id).cloned() else {
            return false;
        };
        self.select_part(selection, part_name, part_type, &[entry], action) == 1
    }

    /// Move the selection at `key` back into the pool, re-sorted by stage.
    ///
    /// Returns the removed selection, or `None` if `key` was not selected.
    pub fn unselect_part(&mut self, selection: &mut PartSelection, key: &str) -> Option<SelectedPart> {
        let part = selection.remove(key)?;

        let group = self
            .pool
            .entry(part.part_name.clone())
            .or_insert_with(|| PartGroup::new(part.part_type, Vec::new()));
        group.parts_ids.push(part.entry());
        group.parts_ids.sort_by_key(|p| p.stage);

        Some(part)
    }

    /// Empty the selection and restore the pool to the loaded catalog
    pub fn clear_parts(&mut self, selection: &mut PartSelection) {
        selection.clear();
        self.pool = self.original.clone();
    }

    /// Attribute names with available entries that start with `prefix`
    /// (case-insensitive), alphabetically.
    pub fn search<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a PartGroup)> + use<'a> {
        let prefix = prefix.to_lowercase();
        self.pool
            .iter()
            .filter(move |(name, group)| {
                !group.parts_ids.is_empty() && name.to_lowercase().starts_with(&prefix)
            })
            .map(|(name, group)| (name.as_str(), group))
    }
}
