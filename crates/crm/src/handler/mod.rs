mod seller;
mod transaction;

use crate::{middleware::metrics::track_metrics, state::AppState};
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::header,
    middleware,
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    errors::{AppErrorHttp, ServiceError},
    utils::shutdown_signal,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::seller::seller_routes;
pub use self::transaction::transaction_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        seller::get_sellers,
        seller::get_seller,
        seller::create_seller,
        seller::update_seller,
        seller::delete_seller,
        seller::get_most_productive_seller,
        seller::get_most_productive_seller_by_days,
        seller::get_low_performance_sellers,
        seller::get_most_productive_time,

        transaction::get_transactions,
        transaction::get_transaction,
        transaction::get_transactions_by_seller,
        transaction::create_transaction,
        transaction::update_transaction,
        transaction::delete_transaction,
        transaction::get_total_amount,
        transaction::get_sales_statistics,
    ),
    tags(
        (name = "Seller", description = "Seller registry endpoints"),
        (name = "Seller Analytics", description = "Seller ranking and productivity endpoints"),
        (name = "Transaction", description = "Sales recording and history endpoints"),
        (name = "Transaction Analytics", description = "Sales totals and statistics endpoints"),
    )
)]
struct ApiDoc;

async fn metrics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let mut body = String::new();
    encode(&mut body, &state.registry)
        .map_err(|e| AppErrorHttp(ServiceError::Internal(e.to_string())))?;

    Ok((
        [(
            header::CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        body,
    ))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(seller_routes(shared_state.clone()))
            .merge(transaction_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(middleware::from_fn_with_state(
                shared_state.clone(),
                track_metrics,
            ))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let metrics_router = Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state);

        app_router
            .merge(metrics_router)
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📈 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
