use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::QueryHandler;

pub fn create_router<H: QueryHandler + 'static>() -> Router<Arc<H>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dataset level queries
        .route(
            "/users/:user_id/repo/:repo_id/branch/:branch_id/dataset_stats",
            get(handlers::handle_dataset_stats::<H>),
        )
        .route(
            "/users/:user_id/repo/:repo_id/branch/:branch_id/dataset_meta_count",
            get(handlers::handle_dataset_meta_counts::<H>),
        )
        .route(
            "/users/:user_id/repo/:repo_id/dataset_duplication",
            get(handlers::handle_dataset_dup::<H>),
        )
        // Asset listing
        .route(
            "/users/:user_id/repo/:repo_id/branch/:branch_id/assets",
            get(handlers::handle_assets::<H>),
        )
}
