//! Collection - Special Collection Membership

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::filter::RangeFilter;

/// A named special collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Collection {
    Mystic,
    Summer,
    Japan,
    Shiny,
    Xmas,
    Nightmare,
    #[serde(rename = "MEO Corp")]
    MeoCorp,
    #[serde(rename = "MEO Corp II")]
    MeoCorpII,
    Origin,
    AgamoGenesis,
}

impl Collection {
    pub const ALL: [Collection; 10] = [
        Collection::Mystic,
        Collection::Summer,
        Collection::Japan,
        Collection::Shiny,
        Collection::Xmas,
        Collection::Nightmare,
        Collection::MeoCorp,
        Collection::MeoCorpII,
        Collection::Origin,
        Collection::AgamoGenesis,
    ];

    /// Part collections are counted per body part and carry a `numParts` range
    pub fn is_parts(&self) -> bool {
        matches!(
            self,
            Collection::Mystic
                | Collection::Summer
                | Collection::Japan
                | Collection::Shiny
                | Collection::Xmas
                | Collection::Nightmare
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Mystic => "Mystic",
            Collection::Summer => "Summer",
            Collection::Japan => "Japan",
            Collection::Shiny => "Shiny",
            Collection::Xmas => "Xmas",
            Collection::Nightmare => "Nightmare",
            Collection::MeoCorp => "MEO Corp",
            Collection::MeoCorpII => "MEO Corp II",
            Collection::Origin => "Origin",
            Collection::AgamoGenesis => "AgamoGenesis",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentinel selections that override every named collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialCollection {
    #[serde(rename = "Any Collection")]
    Any,
    #[serde(rename = "No Collection")]
    None,
}

impl SpecialCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCollection::Any => "Any Collection",
            SpecialCollection::None => "No Collection",
        }
    }
}

impl fmt::Display for SpecialCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-collection settings; `num_parts` is set only for part collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionDetail {
    pub num_parts: Option<RangeFilter>,
}

/// Key of one collection chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    Special(SpecialCollection),
    Named(Collection),
}

/// One element of the `collections` payload array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionFilter {
    Special {
        special: SpecialCollection,
    },
    Parts {
        #[serde(rename = "partCollection")]
        part_collection: Collection,
        #[serde(rename = "numParts")]
        num_parts: RangeFilter,
    },
    Title {
        title: Collection,
    },
}
