use anyhow::Context;
use itertools::Itertools;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::model::{
    Annotation, AssetDetail, AssetQueryArgs, AssetRecord, AssetsResult, DatasetDupResult,
    DatasetRecord, DatasetStatsResult, RepositoryRef, StatsContext,
};
use crate::store::traits::{QueryError, QueryHandler, QueryResult};

type DatasetKey = (String, String, String);

/// Query handler over datasets held in memory.
///
/// Each dataset is stored sorted by asset id and shared behind an `Arc`, so
/// queries clone a pointer under the read lock and compute without holding it.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    datasets: RwLock<HashMap<DatasetKey, Arc<Vec<AssetRecord>>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the dataset for one branch
    pub fn insert_dataset(&self, dataset: DatasetRecord) {
        let mut assets = dataset.assets;
        assets.sort_by(|a, b| a.asset_id.cmp(&b.asset_id));
        assets.dedup_by(|a, b| a.asset_id == b.asset_id);

        let key = (dataset.user_id, dataset.repo_id, dataset.branch_id);
        log::debug!(
            "Loaded dataset {}/{}@{} with {} assets",
            key.0,
            key.1,
            key.2,
            assets.len()
        );
        self.datasets.write().insert(key, Arc::new(assets));
    }

    /// Load every dataset from a JSON file holding an array of datasets
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let datasets: Vec<DatasetRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        let count = datasets.len();
        for dataset in datasets {
            self.insert_dataset(dataset);
        }
        Ok(count)
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets.read().len()
    }

    fn dataset(&self, repo: &RepositoryRef) -> QueryResult<Arc<Vec<AssetRecord>>> {
        self.datasets
            .read()
            .get(&repo.key())
            .cloned()
            .ok_or_else(|| QueryError::RepoNotExist(format!("unknown ref: {}", repo)))
    }
}

/// Counts assets per class for one side of every asset.
///
/// With a non-empty `class_filter` only those classes are counted, and each
/// requested class appears in the output even when no asset carries it.
fn side_stats<'a>(
    sides: impl Iterator<Item = &'a [Annotation]>,
    class_filter: &HashSet<i32>,
) -> StatsContext {
    let mut ctx = StatsContext::default();
    for class_id in class_filter {
        ctx.class_ids_count.insert(*class_id, 0);
    }

    for annotations in sides {
        let counted = annotations
            .iter()
            .filter(|a| class_filter.is_empty() || class_filter.contains(&a.class_id))
            .collect_vec();

        if counted.is_empty() {
            ctx.negative_assets_count += 1;
            continue;
        }
        ctx.positive_assets_count += 1;

        for class_id in counted.iter().map(|a| a.class_id).unique() {
            *ctx.class_ids_count.entry(class_id).or_insert(0) += 1;
        }
        for annotation in &counted {
            for (key, value) in &annotation.tags {
                *ctx.tags_count_total.entry(key.clone()).or_insert(0) += 1;
                *ctx
                    .tags_count
                    .entry(key.clone())
                    .or_default()
                    .entry(value.clone())
                    .or_insert(0) += 1;
            }
        }
    }

    ctx
}

fn compute_stats(assets: &[AssetRecord], class_ids: &[i32]) -> DatasetStatsResult {
    let class_filter: HashSet<i32> = class_ids.iter().copied().collect();
    DatasetStatsResult {
        total_assets_count: assets.len() as i64,
        gt: side_stats(assets.iter().map(|a| a.gt.as_slice()), &class_filter),
        pred: side_stats(assets.iter().map(|a| a.pred.as_slice()), &class_filter),
    }
}

/// Matches `key` or `key:value` against a string map
fn matches_key_filter(
    filters: &[String],
    values: &std::collections::BTreeMap<String, String>,
) -> bool {
    filters.iter().any(|filter| match filter.split_once(':') {
        Some((key, value)) => values.get(key).map(String::as_str) == Some(value),
        None => values.contains_key(filter.as_str()),
    })
}

fn asset_matches(asset: &AssetRecord, args: &AssetQueryArgs) -> bool {
    let class_ok = args.class_ids.is_empty()
        || asset
            .annotations()
            .any(|a| args.class_ids.contains(&a.class_id));
    let cm_ok = args.cm_types.is_empty()
        || asset.annotations().any(|a| args.cm_types.contains(&a.cm));
    let ck_ok = args.content_keys.is_empty() || matches_key_filter(&args.content_keys, &asset.cks);
    let tag_ok = args.tags.is_empty()
        || asset
            .annotations()
            .any(|a| matches_key_filter(&args.tags, &a.tags));

    class_ok && cm_ok && ck_ok && tag_ok
}

#[async_trait::async_trait]
impl QueryHandler for MemoryRepository {
    async fn query_assets(
        &self,
        repo: &RepositoryRef,
        args: &AssetQueryArgs,
    ) -> QueryResult<AssetsResult> {
        let assets = self.dataset(repo)?;
        let filtered = assets.iter().filter(|a| asset_matches(a, args)).collect_vec();

        // A known current asset pins the page start; otherwise offset does.
        let current = match args.current_asset_id.as_str() {
            "" => None,
            current_id => filtered.iter().position(|a| a.asset_id == current_id),
        };
        let anchor = current.unwrap_or(args.offset.max(0) as usize);

        let elements = filtered
            .iter()
            .skip(anchor)
            .take(args.limit.max(1) as usize)
            .map(|a| AssetDetail::from(*a))
            .collect_vec();

        Ok(AssetsResult {
            elements,
            offset: args.offset,
            limit: args.limit,
            anchor: anchor as i64,
            total_assets_count: filtered.len() as i64,
        })
    }

    async fn query_dataset_dup(
        &self,
        repo0: &RepositoryRef,
        repo1: &RepositoryRef,
    ) -> QueryResult<DatasetDupResult> {
        let assets0 = self.dataset(repo0)?;
        let assets1 = self.dataset(repo1)?;

        let ids0: HashSet<&str> = assets0.iter().map(|a| a.asset_id.as_str()).collect();
        let duplication = assets1
            .iter()
            .filter(|a| ids0.contains(a.asset_id.as_str()))
            .count();

        let mut result = DatasetDupResult {
            duplication: duplication as i64,
            ..Default::default()
        };
        result
            .total_count
            .insert(repo0.branch_id.clone(), assets0.len() as i64);
        result
            .total_count
            .insert(repo1.branch_id.clone(), assets1.len() as i64);
        Ok(result)
    }

    async fn query_dataset_meta_counts(
        &self,
        repo: &RepositoryRef,
    ) -> QueryResult<DatasetStatsResult> {
        let assets = self.dataset(repo)?;
        Ok(compute_stats(&assets, &[]))
    }

    async fn query_dataset_stats(
        &self,
        repo: &RepositoryRef,
        class_ids: &[i32],
    ) -> QueryResult<DatasetStatsResult> {
        let assets = self.dataset(repo)?;
        Ok(compute_stats(&assets, class_ids))
    }
}
