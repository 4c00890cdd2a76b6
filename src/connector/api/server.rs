use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::container::Container;
use super::router::build_router;

/// Bind the configured address and serve until ctrl-c.
pub async fn serve(container: Arc<Container>) -> Result<()> {
    let bind = container.config().bind_addr();
    let app = build_router(container);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Rerank server listening on {}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
