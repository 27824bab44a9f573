mod health;
mod stock;

use crate::{middleware::metrics::track_metrics, state::AppState};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::health::health_check;
pub use self::stock::{
    create_stock, delete_stock, get_stock, get_stocks, stock_routes, update_stock,
};

const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stock::get_stocks,
        stock::get_stock,
        stock::create_stock,
        stock::update_stock,
        stock::delete_stock,
    ),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Stock", description = "Stock endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        error!("Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}"),
        );
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(shared_state: Arc<AppState>) -> Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(health_check))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(stock_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(middleware::from_fn_with_state(
                shared_state.clone(),
                track_metrics,
            ))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    /// Serves until a shutdown signal arrives, then gives in-flight requests
    /// [`SHUTDOWN_GRACE`] to finish before aborting the server task.
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tokio::select! {
            result = &mut server => {
                return result
                    .context("Server task panicked")?
                    .context("Server stopped unexpectedly");
            }
            _ = shutdown_signal() => {}
        }

        info!("🛑 Shutting down, waiting up to {:?} for in-flight requests", SHUTDOWN_GRACE);
        let _ = shutdown_tx.send(());

        match tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await {
            Ok(Ok(Ok(()))) => info!("✅ Server stopped gracefully"),
            Ok(Ok(Err(e))) => error!("❌ Server error during shutdown: {e}"),
            Ok(Err(e)) => error!("❌ Server task failed during shutdown: {e}"),
            Err(_) => {
                warn!("⚠️  Shutdown grace period elapsed, forcing exit");
                server.abort();
            }
        }

        Ok(())
    }
}
