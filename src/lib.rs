pub mod api;
pub mod config;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::routes;
pub use api::server::ViewerServer;

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryRepository, QueryError, QueryHandler};

/// Build the in-memory repository described by the configuration
pub fn build_repository(config: &crate::config::AppConfig) -> anyhow::Result<MemoryRepository> {
    let repository = MemoryRepository::new();

    if let Some(seed_path) = &config.repository.seed_path {
        let count = repository.load_from_file(seed_path)?;
        log::info!("Loaded {} datasets from {}", count, seed_path);
    }

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        let count = seed::load_seed_data(&repository);
        log::info!("Loaded {} demo datasets", count);
    }

    Ok(repository)
}
