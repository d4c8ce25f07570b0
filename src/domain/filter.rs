//! Filter - Facet Value Types
//!
//! Plain value types for the individual filter facets. The stateful
//! bookkeeping lives in `state::filter_state`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    BREED_COUNT_MAX, BREED_COUNT_MIN, DEFAULT_TIME_NUM, EVOLVED_PARTS_MAX, EVOLVED_PARTS_MIN,
    LEVEL_MAX, LEVEL_MIN, NUM_PARTS_MAX, NUM_PARTS_MIN, TIME_NUM_MAX, TIME_NUM_MIN,
};

/// Inclusive bounds a range facet may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDomain {
    pub lo: u32,
    pub hi: u32,
}

impl RangeDomain {
    pub const LEVEL: RangeDomain = RangeDomain { lo: LEVEL_MIN, hi: LEVEL_MAX };
    pub const BREED_COUNT: RangeDomain = RangeDomain { lo: BREED_COUNT_MIN, hi: BREED_COUNT_MAX };
    pub const EVOLVED_PARTS: RangeDomain = RangeDomain { lo: EVOLVED_PARTS_MIN, hi: EVOLVED_PARTS_MAX };
    pub const NUM_PARTS: RangeDomain = RangeDomain { lo: NUM_PARTS_MIN, hi: NUM_PARTS_MAX };

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.lo, self.hi)
    }

    /// The full span, which means "no filter"
    pub fn full(&self) -> RangeFilter {
        RangeFilter { min: self.lo, max: self.hi }
    }
}

/// Inclusive `[min, max]` pair, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[u32; 2]", try_from = "[u32; 2]")]
pub struct RangeFilter {
    pub min: u32,
    pub max: u32,
}

impl RangeFilter {
    pub fn new(min: u32, max: u32) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Apply a slider edit.
    ///
    /// Each endpoint moves only if it changed and does not cross the other
    /// endpoint. The max is checked against the already-accepted min, so the
    /// pair can never invert. Returns whether anything changed.
    pub fn apply_edit(&mut self, candidate: [u32; 2], domain: RangeDomain) -> bool {
        let [new_min, new_max] = candidate.map(|v| domain.clamp(v));
        let before = *self;

        if new_min != self.min && new_min <= self.max {
            self.min = new_min;
        }
        if new_max != self.max && new_max >= self.min {
            self.max = new_max;
        }

        *self != before
    }

    /// Format as `N` when min == max, else `N-M`
    pub fn label(&self) -> String {
        if self.min == self.max {
            self.min.to_string()
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

impl From<RangeFilter> for [u32; 2] {
    fn from(range: RangeFilter) -> Self {
        [range.min, range.max]
    }
}

impl TryFrom<[u32; 2]> for RangeFilter {
    type Error = String;

    fn try_from([min, max]: [u32; 2]) -> Result<Self, Self::Error> {
        RangeFilter::new(min, max).ok_or_else(|| format!("range [{min}, {max}] is inverted"))
    }
}

/// Which of the three numeric range facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFacet {
    Level,
    BreedCount,
    EvolvedParts,
}

impl RangeFacet {
    pub const ALL: [RangeFacet; 3] = [RangeFacet::Level, RangeFacet::BreedCount, RangeFacet::EvolvedParts];

    pub fn domain(&self) -> RangeDomain {
        match self {
            RangeFacet::Level => RangeDomain::LEVEL,
            RangeFacet::BreedCount => RangeDomain::BREED_COUNT,
            RangeFacet::EvolvedParts => RangeDomain::EVOLVED_PARTS,
        }
    }

    /// Chip prefix
    pub fn label(&self) -> &'static str {
        match self {
            RangeFacet::Level => "Level",
            RangeFacet::BreedCount => "Breed",
            RangeFacet::EvolvedParts => "Evolved",
        }
    }
}

/// Which end of a range a text input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEndpoint {
    Min,
    Max,
}

/// Unit of the time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    #[default]
    Days,
}

/// Lookback window: the last `num` hours or days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub num: u32,
    pub unit: TimeUnit,
}

impl TimeWindow {
    pub fn new(num: u32, unit: TimeUnit) -> Self {
        Self {
            num: num.clamp(TIME_NUM_MIN, TIME_NUM_MAX),
            unit,
        }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_NUM, TimeUnit::Days)
    }
}

/// Axie class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxieClass {
    Aquatic,
    Beast,
    Bird,
    Bug,
    Plant,
    Reptile,
    Mech,
    Dawn,
    Dusk,
}

impl AxieClass {
    pub const ALL: [AxieClass; 9] = [
        AxieClass::Aquatic,
        AxieClass::Beast,
        AxieClass::Bird,
        AxieClass::Bug,
        AxieClass::Plant,
        AxieClass::Reptile,
        AxieClass::Mech,
        AxieClass::Dawn,
        AxieClass::Dusk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AxieClass::Aquatic => "Aquatic",
            AxieClass::Beast => "Beast",
            AxieClass::Bird => "Bird",
            AxieClass::Bug => "Bug",
            AxieClass::Plant => "Plant",
            AxieClass::Reptile => "Reptile",
            AxieClass::Mech => "Mech",
            AxieClass::Dawn => "Dawn",
            AxieClass::Dusk => "Dusk",
        }
    }
}

impl fmt::Display for AxieClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Latest,
    LowestPrice,
    HighestPrice,
    LowestLevel,
    HighestLevel,
}
