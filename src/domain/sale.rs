//! Sale - Overview Aggregates and Sale Records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{MARKETPLACE_URL, TX_EXPLORER_URL};
use crate::domain::collection::Collection;
use crate::utils::format::{abbreviate_hash, format_epoch_local};

/// One time bucket of the overview chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartBucket {
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub volume_eth: f64,
    #[serde(default)]
    pub avg_price_eth: f64,
}

/// Aggregate statistics for the current filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    pub total_sales: u64,
    pub total_volume_eth: f64,
    pub avg_price_eth: f64,
    #[serde(default)]
    pub chart: Vec<ChartBucket>,
}

impl Default for OverviewData {
    fn default() -> Self {
        Self {
            total_sales: 0,
            total_volume_eth: 0.0,
            avg_price_eth: 0.0,
            chart: vec![ChartBucket::default()],
        }
    }
}

/// One body part of a sold axie
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalePart {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stage: Option<u32>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub special_genes: Option<String>,
}

/// One sale in the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub axie_id: serde_json::Value,
    pub price_eth: f64,
    #[serde(default)]
    pub transaction_hash: String,
    /// Epoch seconds
    pub sale_date: i64,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub xp: Option<i64>,
    #[serde(default)]
    pub breed_count: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub parts: BTreeMap<String, SalePart>,
    #[serde(default)]
    pub body_shape: Option<String>,
    #[serde(default)]
    pub collection_title: Option<String>,
}

impl SaleRecord {
    /// Axie id without JSON quoting
    pub fn axie_id_text(&self) -> String {
        match &self.axie_id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Collection memberships with how many parts count toward each.
    ///
    /// Every `_`-separated special gene token counts toward the first part
    /// collection whose name it contains (case-insensitive). A known title
    /// collection counts once.
    pub fn collections(&self) -> BTreeMap<Collection, u32> {
        let part_collections: Vec<Collection> =
            Collection::ALL.into_iter().filter(Collection::is_parts).collect();
        let mut counts = BTreeMap::new();

        for part in self.parts.values() {
            let Some(genes) = part.special_genes.as_deref().filter(|g| !g.is_empty()) else {
                continue;
            };
            for token in genes.split('_') {
                let token = token.to_lowercase();
                if let Some(collection) = part_collections
                    .iter()
                    .find(|c| token.contains(&c.as_str().to_lowercase()))
                {
                    *counts.entry(*collection).or_insert(0) += 1;
                }
            }
        }

        if let Some(title) = self
            .collection_title
            .as_deref()
            .and_then(Collection::from_name)
            .filter(|c| !c.is_parts())
        {
            counts.insert(title, 1);
        }

        counts
    }

    /// Sale time in local time, `YYYY-MM-DD H:MM:SS`
    pub fn sold_at(&self) -> String {
        format_epoch_local(self.sale_date)
    }

    pub fn short_tx_hash(&self) -> String {
        abbreviate_hash(&self.transaction_hash, 8)
    }

    pub fn tx_url(&self) -> String {
        format!("{TX_EXPLORER_URL}{}", self.transaction_hash)
    }

    pub fn marketplace_url(&self) -> String {
        format!("{MARKETPLACE_URL}{}/", self.axie_id_text())
    }
}
