//! Part - Selectable Attribute Variants

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one part variant, echoed back exactly as the service sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartId {
    Number(i64),
    Text(String),
}

impl From<i64> for PartId {
    fn from(id: i64) -> Self {
        PartId::Number(id)
    }
}

impl From<&str> for PartId {
    fn from(id: &str) -> Self {
        PartId::Text(id.to_string())
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartId::Number(n) => write!(f, "{n}"),
            PartId::Text(s) => f.write_str(s),
        }
    }
}

/// One variant of one attribute at one evolution stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartEntry {
    pub id: PartId,
    pub stage: u32,
}

impl PartEntry {
    pub fn new(id: impl Into<PartId>, stage: u32) -> Self {
        Self {
            id: id.into(),
            stage,
        }
    }
}

/// Body slot an attribute belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartType {
    Eyes,
    Ears,
    Mouth,
    Horn,
    Back,
    Tail,
    Body,
}

impl PartType {
    /// Slots that have include/exclude query buckets, in payload order
    pub const QUERYABLE: [PartType; 6] = [
        PartType::Eyes,
        PartType::Ears,
        PartType::Mouth,
        PartType::Horn,
        PartType::Back,
        PartType::Tail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Eyes => "eyes",
            PartType::Ears => "ears",
            PartType::Mouth => "mouth",
            PartType::Horn => "horn",
            PartType::Back => "back",
            PartType::Tail => "tail",
            PartType::Body => "body",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a selected part includes or excludes matching sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartAction {
    Include,
    Exclude,
}

/// All variants of one named attribute as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartGroup {
    #[serde(rename = "type")]
    pub part_type: PartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_genes: Option<String>,
    #[serde(rename = "partsIds")]
    pub parts_ids: Vec<PartEntry>,
}

impl PartGroup {
    pub fn new(part_type: PartType, parts_ids: Vec<PartEntry>) -> Self {
        Self {
            part_type,
            class: None,
            special_genes: None,
            parts_ids,
        }
    }
}

/// Attribute name -> variants, ordered by name
pub type PartCatalogData = BTreeMap<String, PartGroup>;

/// Display key of a selected part: `<attributeName>-<stage>`
pub fn display_key(part_name: &str, stage: u32) -> String {
    format!("{part_name}-{stage}")
}

/// A part moved out of the catalog into the active selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPart {
    /// Attribute the entry came from
    pub part_name: String,
    pub part_type: PartType,
    pub id: PartId,
    pub stage: u32,
    pub action: PartAction,
}

impl SelectedPart {
    /// The catalog entry this selection was made from
    pub fn entry(&self) -> PartEntry {
        PartEntry {
            id: self.id.clone(),
            stage: self.stage,
        }
    }

    pub fn key(&self) -> String {
        display_key(&self.part_name, self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_decodes_service_shape() {
        let json = r#"{
            "Little Owl": {"type": "eyes", "class": "bird", "special_genes": "",
                           "partsIds": [{"id": "eyes-little-owl", "stage": 1}, {"id": 77, "stage": 2}]}
        }"#;
        let catalog: PartCatalogData = serde_json::from_str(json).expect("decode");
        let group = &catalog["Little Owl"];
        assert_eq!(group.part_type, PartType::Eyes);
        assert_eq!(group.parts_ids[0].id, PartId::from("eyes-little-owl"));
        assert_eq!(group.parts_ids[1].id, PartId::Number(77));
    }

    #[test]
    fn part_id_serializes_as_received() {
        let ids = vec![PartId::Number(7), PartId::from("horn-3")];
        let json = serde_json::to_string(&ids).expect("encode");
        assert_eq!(json, r#"[7,"horn-3"]"#);
    }

    #[test]
    fn display_key_joins_name_and_stage() {
        assert_eq!(display_key("Tiny Dino", 2), "Tiny Dino-2");
    }
}
