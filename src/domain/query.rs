//! Query - Outbound Request Payloads
//!
//! Field names are the data service contract and must not change.

use serde::{Deserialize, Serialize};

use crate::domain::collection::CollectionFilter;
use crate::domain::filter::{AxieClass, RangeFilter, SortBy, TimeUnit};
use crate::domain::part::{PartId, PartType};

/// Part ids per body slot. Every slot is always present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartBuckets {
    pub eyes: Vec<PartId>,
    pub ears: Vec<PartId>,
    pub mouth: Vec<PartId>,
    pub horn: Vec<PartId>,
    pub back: Vec<PartId>,
    pub tail: Vec<PartId>,
}

impl PartBuckets {
    /// Bucket for a slot; `body` has none
    pub fn bucket_mut(&mut self, part_type: PartType) -> Option<&mut Vec<PartId>> {
        match part_type {
            PartType::Eyes => Some(&mut self.eyes),
            PartType::Ears => Some(&mut self.ears),
            PartType::Mouth => Some(&mut self.mouth),
            PartType::Horn => Some(&mut self.horn),
            PartType::Back => Some(&mut self.back),
            PartType::Tail => Some(&mut self.tail),
            PartType::Body => None,
        }
    }

    pub fn bucket(&self, part_type: PartType) -> &[PartId] {
        match part_type {
            PartType::Eyes => &self.eyes,
            PartType::Ears => &self.ears,
            PartType::Mouth => &self.mouth,
            PartType::Horn => &self.horn,
            PartType::Back => &self.back,
            PartType::Tail => &self.tail,
            PartType::Body => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        PartType::QUERYABLE.iter().all(|t| self.bucket(*t).is_empty())
    }
}

/// Body of `POST /axies/graph/overview`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewQuery {
    pub time_unit: TimeUnit,
    pub time_num: u32,
    pub include_parts: PartBuckets,
    pub exclude_parts: PartBuckets,
    pub axie_class: Vec<AxieClass>,
    pub level: RangeFilter,
    pub breed_count: RangeFilter,
    pub evolved_parts_count: RangeFilter,
    pub collections: Vec<CollectionFilter>,
}

/// Body of `POST /axies/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub filters: OverviewQuery,
    pub limit: u32,
    pub offset: u32,
    pub sort_by: SortBy,
}
