use crate::model::{
    AssetQueryArgs, AssetsResult, DatasetDupResult, DatasetStatsResult, RepositoryRef,
};
use thiserror::Error;

/// Why a query against the repository failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The user/repo/branch triple does not resolve to a dataset
    #[error("{0}")]
    RepoNotExist(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    Internal(String),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Answers viewer queries against a versioned dataset repository.
///
/// Implementations are shared across concurrent requests.
#[async_trait::async_trait]
pub trait QueryHandler: Send + Sync {
    async fn query_assets(
        &self,
        repo: &RepositoryRef,
        args: &AssetQueryArgs,
    ) -> QueryResult<AssetsResult>;

    async fn query_dataset_dup(
        &self,
        repo0: &RepositoryRef,
        repo1: &RepositoryRef,
    ) -> QueryResult<DatasetDupResult>;

    async fn query_dataset_meta_counts(
        &self,
        repo: &RepositoryRef,
    ) -> QueryResult<DatasetStatsResult>;

    async fn query_dataset_stats(
        &self,
        repo: &RepositoryRef,
        class_ids: &[i32],
    ) -> QueryResult<DatasetStatsResult>;
}
