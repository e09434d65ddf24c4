use crate::model::{cm_type, Annotation, AssetRecord, BoundingBox, DatasetRecord};
use crate::store::MemoryRepository;

pub const DEMO_USER: &str = "0001";
pub const DEMO_REPO: &str = "000001";

fn demo_asset(asset_id: &str, class_ids: &[i32], weather: &str) -> AssetRecord {
    let mut asset = AssetRecord::new(asset_id).with_ck("weather", weather);
    asset.width = 640;
    asset.height = 480;
    asset.timestamp = 1_650_000_000;

    for (i, class_id) in class_ids.iter().enumerate() {
        let bbox = BoundingBox {
            x: 10 * i as i32,
            y: 10 * i as i32,
            w: 100,
            h: 80,
        };
        let mut gt = Annotation::new(*class_id).with_tag("difficulty", "easy");
        gt.bbox = Some(bbox.clone());
        let mut pred = Annotation::new(*class_id).with_cm(cm_type::TP);
        pred.bbox = Some(bbox);
        pred.score = 0.9;
        asset = asset.with_gt(gt).with_pred(pred);
    }
    asset
}

/// Two small overlapping datasets for local demos
pub fn demo_datasets() -> Vec<DatasetRecord> {
    let training = vec![
        demo_asset("a001", &[0], "sunny"),
        demo_asset("a002", &[0, 1], "rainy"),
        demo_asset("a003", &[], "sunny"),
        demo_asset("a004", &[1], "cloudy"),
    ];
    let validation = vec![
        demo_asset("a003", &[], "sunny"),
        demo_asset("a004", &[1], "cloudy"),
        demo_asset("a005", &[2], "rainy"),
    ];

    vec![
        DatasetRecord {
            user_id: DEMO_USER.to_string(),
            repo_id: DEMO_REPO.to_string(),
            branch_id: "t-train".to_string(),
            assets: training,
        },
        DatasetRecord {
            user_id: DEMO_USER.to_string(),
            repo_id: DEMO_REPO.to_string(),
            branch_id: "t-val".to_string(),
            assets: validation,
        },
    ]
}

pub fn load_seed_data(store: &MemoryRepository) -> usize {
    let datasets = demo_datasets();
    let count = datasets.len();
    for dataset in datasets {
        store.insert_dataset(dataset);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RepositoryRef;
    use crate::store::QueryHandler;

    #[tokio::test]
    async fn test_demo_datasets_overlap() {
        let store = MemoryRepository::new();
        assert_eq!(load_seed_data(&store), 2);

        let dup = store
            .query_dataset_dup(
                &RepositoryRef::new(DEMO_USER, DEMO_REPO, "t-train"),
                &RepositoryRef::new(DEMO_USER, DEMO_REPO, "t-val"),
            )
            .await
            .unwrap();
        assert_eq!(dup.duplication, 2);
    }
}
