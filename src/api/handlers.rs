use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::params::{optional_int_list, optional_string_list, parse_int, QueryParams};
use crate::api::resolve::{resolve_one, resolve_two};
use crate::model::{
    AssetQueryArgs, AssetsResult, DatasetDupResult, DatasetStatsResult, ResponseEnvelope,
};
use crate::store::traits::QueryHandler;

pub type AppState<H> = Arc<H>;

pub type ApiResult<T> = Result<Json<ResponseEnvelope<T>>, ApiError>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// Every query parameter arrives as a raw string and is parsed leniently
// by the handler, so a malformed value never rejects the whole request.

pub type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn query_params(query: RawQuery) -> Result<QueryParams, ApiError> {
    let Query(pairs) = query?;
    Ok(QueryParams::from(pairs))
}

#[derive(Debug, Default)]
pub struct AssetsQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub class_ids: Option<String>,
    pub current_asset_id: Option<String>,
    pub cm_types: Option<String>,
    pub cks: Option<String>,
    pub tags: Option<String>,
}

impl AssetsQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        let get = |key: &str| params.first(key).map(String::from);
        Self {
            offset: get("offset"),
            limit: get("limit"),
            class_ids: get("class_ids"),
            current_asset_id: get("current_asset_id"),
            cm_types: get("cm_types"),
            cks: get("cks"),
            tags: get("tags"),
        }
    }

    /// Normalize into handler arguments: offset floors at 0, limit at 1
    pub fn into_args(self) -> AssetQueryArgs {
        let offset = self.offset.as_deref().and_then(parse_int).unwrap_or(0);
        let limit = self.limit.as_deref().and_then(parse_int).unwrap_or(1);

        AssetQueryArgs {
            class_ids: optional_int_list(self.class_ids.as_deref()),
            current_asset_id: self.current_asset_id.unwrap_or_default(),
            cm_types: optional_int_list(self.cm_types.as_deref()),
            content_keys: optional_string_list(self.cks.as_deref()),
            tags: optional_string_list(self.tags.as_deref()),
            ..AssetQueryArgs::default()
        }
        .with_pagination(offset, limit)
    }
}

/// GET /users/{user_id}/repo/{repo_id}/branch/{branch_id}/dataset_stats
pub async fn handle_dataset_stats<H: QueryHandler>(
    State(handler): State<AppState<H>>,
    path: Result<Path<(String, String, String)>, PathRejection>,
    query: RawQuery,
) -> ApiResult<DatasetStatsResult> {
    let Path((user_id, repo_id, branch_id)) = path?;
    let params = query_params(query)?;
    let repo = resolve_one(&user_id, &repo_id, &branch_id);
    let class_ids = optional_int_list(params.first("class_ids"));

    log::debug!("dataset_stats {} class_ids={:?}", repo, class_ids);
    let result = handler.query_dataset_stats(&repo, &class_ids).await?;
    Ok(Json(ResponseEnvelope::success(result)))
}

/// GET /users/{user_id}/repo/{repo_id}/branch/{branch_id}/dataset_meta_count
pub async fn handle_dataset_meta_counts<H: QueryHandler>(
    State(handler): State<AppState<H>>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> ApiResult<DatasetStatsResult> {
    let Path((user_id, repo_id, branch_id)) = path?;
    let repo = resolve_one(&user_id, &repo_id, &branch_id);

    log::debug!("dataset_meta_count {}", repo);
    let result = handler.query_dataset_meta_counts(&repo).await?;
    Ok(Json(ResponseEnvelope::success(result)))
}

/// GET /users/{user_id}/repo/{repo_id}/dataset_duplication
pub async fn handle_dataset_dup<H: QueryHandler>(
    State(handler): State<AppState<H>>,
    path: Result<Path<(String, String)>, PathRejection>,
    query: RawQuery,
) -> ApiResult<DatasetDupResult> {
    let Path((user_id, repo_id)) = path?;
    let params = query_params(query)?;
    let (repo0, repo1) = resolve_two(&user_id, &repo_id, params.first("candidate_dataset_ids"))?;

    log::debug!("dataset_duplication {} vs {}", repo0, repo1);
    let result = handler.query_dataset_dup(&repo0, &repo1).await?;
    Ok(Json(ResponseEnvelope::success(result)))
}

/// GET /users/{user_id}/repo/{repo_id}/branch/{branch_id}/assets
pub async fn handle_assets<H: QueryHandler>(
    State(handler): State<AppState<H>>,
    path: Result<Path<(String, String, String)>, PathRejection>,
    query: RawQuery,
) -> ApiResult<AssetsResult> {
    let Path((user_id, repo_id, branch_id)) = path?;
    let params = query_params(query)?;
    let repo = resolve_one(&user_id, &repo_id, &branch_id);
    let args = AssetsQuery::from_params(&params).into_args();

    log::debug!("assets {} {:?}", repo, args);
    let result = handler.query_assets(&repo, &args).await?;
    Ok(Json(ResponseEnvelope::success(result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_query_normalizes_pagination() {
        let query = AssetsQuery {
            offset: Some("-1".to_string()),
            limit: Some("0".to_string()),
            ..Default::default()
        };
        let args = query.into_args();
        assert_eq!(args.offset, 0);
        assert_eq!(args.limit, 1);
    }

    #[test]
    fn test_assets_query_defaults() {
        let args = AssetsQuery::default().into_args();
        assert_eq!(args, AssetQueryArgs::default());

        let query = AssetsQuery {
            offset: Some("abc".to_string()),
            limit: Some("".to_string()),
            ..Default::default()
        };
        let args = query.into_args();
        assert_eq!(args.offset, 0);
        assert_eq!(args.limit, 1);
    }

    #[test]
    fn test_assets_query_from_repeated_params() {
        let params = QueryParams::from(vec![
            ("limit".to_string(), "2".to_string()),
            ("limit".to_string(), "3".to_string()),
            ("tags".to_string(), "t0".to_string()),
        ]);
        let args = AssetsQuery::from_params(&params).into_args();
        assert_eq!(args.limit, 2);
        assert_eq!(args.offset, 0);
        assert_eq!(args.tags, vec!["t0"]);
    }

    #[test]
    fn test_assets_query_lists() {
        let query = AssetsQuery {
            offset: Some("10".to_string()),
            limit: Some("20".to_string()),
            class_ids: Some("0,1".to_string()),
            current_asset_id: Some("asset_id".to_string()),
            cm_types: Some("0,x,1".to_string()),
            cks: Some("ck0,ck1".to_string()),
            tags: Some("tag0,tag1".to_string()),
        };
        let args = query.into_args();
        assert_eq!(args.offset, 10);
        assert_eq!(args.limit, 20);
        assert_eq!(args.class_ids, vec![0, 1]);
        assert_eq!(args.current_asset_id, "asset_id");
        assert_eq!(args.cm_types, vec![0, 1]);
        assert_eq!(args.content_keys, vec!["ck0", "ck1"]);
        assert_eq!(args.tags, vec!["tag0", "tag1"]);
    }
}
