//! Axum router and HTTP entry point.

use std::sync::Arc;

use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::ui::app::render_page;

/// Build the application router.
pub fn router(config: &AppConfig) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let app = router(&config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %format!("http://{addr}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Index page handler.
async fn index_handler() -> impl IntoResponse {
    Html(render_page())
}
