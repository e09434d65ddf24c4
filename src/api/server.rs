use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::error::handle_panic;
use crate::api::routes::create_router;
use crate::config::ServerConfig;
use crate::store::traits::QueryHandler;

/// HTTP front of the viewer. Owns its router and the query handler it dispatches to.
pub struct ViewerServer<H: QueryHandler + 'static> {
    config: ServerConfig,
    handler: Arc<H>,
    router: Router,
}

impl<H: QueryHandler + 'static> ViewerServer<H> {
    pub fn new(config: ServerConfig, handler: Arc<H>) -> Self {
        let router = create_router::<H>()
            .with_state(handler.clone())
            .layer(CatchPanicLayer::custom(handle_panic));

        Self {
            config,
            handler,
            router,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        log::info!("Viewer server listening on http://{}", listener.local_addr()?);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        log::info!("Viewer server stopped");
        Ok(())
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.address()).await?;
        self.serve(listener, shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
