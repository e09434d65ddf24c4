use dataset_viewer::config::ServerConfig;
use dataset_viewer::seed::{load_seed_data, DEMO_REPO, DEMO_USER};
use dataset_viewer::{MemoryRepository, ViewerServer};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.expect("body is not JSON");
        (status, body)
    }
}

#[tokio::test]
async fn test_viewer_against_demo_repository() {
    let repository = Arc::new(MemoryRepository::new());
    load_seed_data(&repository);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = ViewerServer::new(ServerConfig::default(), repository);
    assert_eq!(server.handler().dataset_count(), 2);
    let server_task = tokio::spawn(server.serve(listener, async move {
        let _ = shutdown_rx.await;
    }));

    let client = TestClient::new(base_url);
    let prefix = format!("/users/{}/repo/{}", DEMO_USER, DEMO_REPO);

    // Meta counts over the whole training branch
    let (status, body) = client
        .get(&format!("{}/branch/t-train/dataset_meta_count", prefix))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["Code"], 0);
    assert_eq!(body["Success"], true);
    assert_eq!(body["Result"]["total_assets_count"], 4);
    assert_eq!(body["Result"]["gt"]["class_ids_count"]["0"], 2);
    assert_eq!(body["Result"]["gt"]["negative_assets_count"], 1);

    // Stats restricted to one class
    let (status, body) = client
        .get(&format!("{}/branch/t-train/dataset_stats?class_ids=1", prefix))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["Result"]["gt"]["class_ids_count"]["1"], 2);
    assert!(body["Result"]["gt"]["class_ids_count"].get("0").is_none());

    // Duplication between the two demo branches
    let (status, body) = client
        .get(&format!(
            "{}/dataset_duplication?candidate_dataset_ids=t-train,t-val",
            prefix
        ))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["Result"]["duplication"], 2);
    assert_eq!(body["Result"]["total_count"]["t-train"], 4);
    assert_eq!(body["Result"]["total_count"]["t-val"], 3);

    // Asset listing with pagination normalized
    let (status, body) = client
        .get(&format!(
            "{}/branch/t-train/assets?offset=-5&limit=0&cks=weather:sunny",
            prefix
        ))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["Result"]["offset"], 0);
    assert_eq!(body["Result"]["limit"], 1);
    assert_eq!(body["Result"]["total_assets_count"], 2);
    assert_eq!(body["Result"]["elements"][0]["asset_id"], "a001");

    // Unknown branch
    let (status, body) = client
        .get(&format!("{}/branch/missing/dataset_meta_count", prefix))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["Code"], 180002);
    assert_eq!(body["Success"], false);
    assert_eq!(body["Result"]["Code"], 180002);
    assert_eq!(body["Result"]["Msg"], body["Msg"]);

    // Missing candidates
    let (status, body) = client.get(&format!("{}/dataset_duplication", prefix)).await;
    assert_eq!(status, 400);
    assert_eq!(body["Code"], 180001);
    assert_eq!(body["Msg"], "Invalid candidate_dataset_ids.");

    shutdown_tx.send(()).unwrap();
    server_task.await.unwrap().unwrap();
}
