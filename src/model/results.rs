use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Annotation, AssetRecord};

/// Counts for one side of a dataset (ground truth or prediction)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsContext {
    pub class_ids_count: BTreeMap<i32, i64>,
    pub negative_assets_count: i64,
    pub positive_assets_count: i64,
    pub tags_count_total: BTreeMap<String, i64>,
    pub tags_count: BTreeMap<String, BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatsResult {
    pub total_assets_count: i64,
    pub gt: StatsContext,
    pub pred: StatsContext,
}

impl DatasetStatsResult {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDupResult {
    pub duplication: i64,
    /// Asset count per branch id
    pub total_count: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub width: i32,
    pub height: i32,
    pub image_channels: i32,
    pub timestamp: i64,
}

/// One asset as returned by an asset listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub asset_id: String,
    pub metadata: AssetMetadata,
    pub class_ids: Vec<i32>,
    pub cks: BTreeMap<String, String>,
    pub gt: Vec<Annotation>,
    pub pred: Vec<Annotation>,
}

impl From<&AssetRecord> for AssetDetail {
    fn from(asset: &AssetRecord) -> Self {
        Self {
            asset_id: asset.asset_id.clone(),
            metadata: AssetMetadata {
                width: asset.width,
                height: asset.height,
                image_channels: asset.image_channels,
                timestamp: asset.timestamp,
            },
            class_ids: asset.class_ids(),
            cks: asset.cks.clone(),
            gt: asset.gt.clone(),
            pred: asset.pred.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsResult {
    pub elements: Vec<AssetDetail>,
    pub offset: i32,
    pub limit: i32,
    /// Index in the filtered listing where this page starts
    pub anchor: i64,
    pub total_assets_count: i64,
}
