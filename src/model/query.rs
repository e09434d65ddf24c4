use serde::{Deserialize, Serialize};

/// Normalized arguments for an asset listing.
///
/// `offset` is never negative and `limit` is never below 1 once a value
/// of this type reaches a query handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetQueryArgs {
    pub offset: i32,
    pub limit: i32,
    pub class_ids: Vec<i32>,
    pub current_asset_id: String,
    pub cm_types: Vec<i32>,
    pub content_keys: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for AssetQueryArgs {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 1,
            class_ids: Vec::new(),
            current_asset_id: String::new(),
            cm_types: Vec::new(),
            content_keys: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl AssetQueryArgs {
    /// Clamp pagination into its valid range: offset >= 0, limit >= 1
    pub fn with_pagination(mut self, offset: i64, limit: i64) -> Self {
        self.offset = offset.clamp(0, i32::MAX as i64) as i32;
        self.limit = limit.clamp(1, i32::MAX as i64) as i32;
        self
    }
}
