use std::net::SocketAddr;
use std::path::Path;

use axum::extract::Request;
use axum::{Router, ServiceExt};
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router wrapped so that `/api/paises/` routes like `/api/paises`.
pub type App = NormalizePath<Router>;

/// The whole application: `/api` plus the single-page app for everything else.
///
/// Any path that is not an API route and not a file in `static_dir` is
/// answered with `static_dir/index.html` so client-side routing works.
pub fn build_app(db: DatabaseConnection, static_dir: &str) -> App {
    let index = Path::new(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .nest("/api", routes::api_router(db))
        .fallback_service(spa)
        .layer(build_cors())
        .layer(routes::trace_layer());
    // must wrap the router: layers added with Router::layer run after routing
    NormalizePath::trim_trailing_slash(router)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: App, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Connect the store, bind and serve until Ctrl-C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_static_dir(&cfg.server.static_dir).await?;

    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let app = build_app(db, &cfg.server.static_dir);

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(service = "server", event = "listening", %addr, static_dir = %cfg.server.static_dir, "server listening");
    serve(listener, app, shutdown_signal()).await?;
    info!(service = "server", event = "drained", "in-flight requests finished");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl-C, shutting down");
}
