use dataset_viewer::config::AppConfig;
use dataset_viewer::{build_repository, ViewerServer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::{Builder, Env};

    // Info by default, RUST_LOG overrides
    Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Dataset Viewer: query facade for versioned datasets");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let repository = Arc::new(build_repository(&config)?);
    println!("Repository ready with {} datasets", repository.dataset_count());

    let server = ViewerServer::new(config.server.clone(), repository);
    println!("Viewer server running on http://{}", server.address());

    server.start().await?;

    Ok(())
}
