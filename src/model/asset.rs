use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Content-matching type of an annotation against the other side (gt vs pred)
pub mod cm_type {
    pub const NOT_SET: i32 = 0;
    pub const TP: i32 = 1;
    pub const FP: i32 = 2;
    pub const FN: i32 = 3;
    pub const TN: i32 = 4;
    pub const UNKNOWN: i32 = 5;
    pub const MTP: i32 = 11;
    pub const IGNORED: i32 = 12;
}

/// One object annotation on an asset, either ground truth or prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub class_id: i32,
    #[serde(default)]
    pub cm: i32,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub score: f32,
}

impl Annotation {
    pub fn new(class_id: i32) -> Self {
        Self {
            class_id,
            cm: cm_type::NOT_SET,
            tags: BTreeMap::new(),
            bbox: None,
            score: 0.0,
        }
    }

    pub fn with_cm(mut self, cm: i32) -> Self {
        self.cm = cm;
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }
}

/// An asset as the in-memory repository stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub asset_id: String,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default = "default_channels")]
    pub image_channels: i32,
    #[serde(default)]
    pub timestamp: i64,
    /// Asset-level content keys, e.g. `{"weather": "sunny"}`
    #[serde(default)]
    pub cks: BTreeMap<String, String>,
    #[serde(default)]
    pub gt: Vec<Annotation>,
    #[serde(default)]
    pub pred: Vec<Annotation>,
}

fn default_channels() -> i32 {
    3
}

impl AssetRecord {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            width: 0,
            height: 0,
            image_channels: default_channels(),
            timestamp: 0,
            cks: BTreeMap::new(),
            gt: Vec::new(),
            pred: Vec::new(),
        }
    }

    pub fn with_ck(mut self, key: &str, value: &str) -> Self {
        self.cks.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_gt(mut self, annotation: Annotation) -> Self {
        self.gt.push(annotation);
        self
    }

    pub fn with_pred(mut self, annotation: Annotation) -> Self {
        self.pred.push(annotation);
        self
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.gt.iter().chain(self.pred.iter())
    }

    /// Distinct class ids over gt and pred, ascending
    pub fn class_ids(&self) -> Vec<i32> {
        self.annotations()
            .map(|a| a.class_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// A full dataset: every asset of one branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub user_id: String,
    pub repo_id: String,
    pub branch_id: String,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}
