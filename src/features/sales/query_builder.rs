//! Query Builder
//!
//! Pure rendering of the filter state into the two outbound payloads.

use crate::domain::collection::CollectionFilter;
use crate::domain::part::PartAction;
use crate::domain::query::{ListQuery, OverviewQuery, PartBuckets};
use crate::state::{CollectionSelection, FilterState, PageState, PartSelection};

/// Payload for the overview aggregates
pub fn build_overview_query(filters: &FilterState) -> OverviewQuery {
    let (include_parts, exclude_parts) = part_buckets(&filters.parts);

    OverviewQuery {
        time_unit: filters.time_window.unit,
        time_num: filters.time_window.num,
        include_parts,
        exclude_parts,
        axie_class: filters.classes.iter().copied().collect(),
        level: filters.level,
        breed_count: filters.breed_count,
        evolved_parts_count: filters.evolved_parts,
        collections: collection_filters(&filters.collections),
    }
}

/// Payload for one page of the sale list
pub fn build_list_query(filters: &FilterState, page: &PageState) -> ListQuery {
    ListQuery {
        filters: build_overview_query(filters),
        limit: page.page_size(),
        offset: page.offset(),
        sort_by: filters.sort_by,
    }
}

/// Split selected part ids by action, in selection order
fn part_buckets(parts: &PartSelection) -> (PartBuckets, PartBuckets) {
    let mut include = PartBuckets::default();
    let mut exclude = PartBuckets::default();

    for part in parts.values() {
        let buckets = match part.action {
            PartAction::Include => &mut include,
            PartAction::Exclude => &mut exclude,
        };
        match buckets.bucket_mut(part.part_type) {
            Some(bucket) => bucket.push(part.id.clone()),
            None => tracing::warn!(part = %part.key(), "No query slot for {} parts", part.part_type.as_str()),
        }
    }

    (include, exclude)
}

fn collection_filters(collections: &CollectionSelection) -> Vec<CollectionFilter> {
    if let Some(special) = collections.special() {
        return vec![CollectionFilter::Special { special }];
    }

    collections
        .named()
        .map(|(collection, detail)| match detail.num_parts {
            Some(num_parts) => CollectionFilter::Parts {
                part_collection: *collection,
                num_parts,
            },
            None => CollectionFilter::Title { title: *collection },
        })
        .collect()
}
