use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::seller::service::{
        analytics::DynSellerAnalyticsService, command::DynSellerCommandService,
        query::DynSellerQueryService,
    },
    domain::{
        requests::{CreateSellerRequest, LowPerformanceQuery, UpdateSellerRequest},
        responses::{ApiResponse, ProductiveIntervalResponse, SellerResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/sellers",
    tag = "Seller",
    responses(
        (status = 200, description = "List of sellers", body = ApiResponse<Vec<SellerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sellers(
    Extension(service): Extension<DynSellerQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller details", body = ApiResponse<SellerResponse>),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn get_seller(
    Extension(service): Extension<DynSellerQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/sellers",
    tag = "Seller",
    request_body = CreateSellerRequest,
    responses(
        (status = 201, description = "Seller created", body = ApiResponse<SellerResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_seller(
    Extension(service): Extension<DynSellerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSellerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    request_body = UpdateSellerRequest,
    responses(
        (status = 200, description = "Seller updated", body = ApiResponse<SellerResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn update_seller(
    Extension(service): Extension<DynSellerCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateSellerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/sellers/{id}",
    tag = "Seller",
    params(("id" = i64, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller deleted", body = ApiResponse<bool>),
        (status = 400, description = "Seller still has transactions", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn delete_seller(
    Extension(service): Extension<DynSellerCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/analytics/most-productive",
    tag = "Seller Analytics",
    responses(
        (status = 200, description = "Seller with the largest sales sum", body = ApiResponse<SellerResponse>),
        (status = 404, description = "No sales recorded", body = ErrorResponse)
    )
)]
pub async fn get_most_productive_seller(
    Extension(service): Extension<DynSellerAnalyticsService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.most_productive_all_time().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/analytics/most-productive/{days}",
    tag = "Seller Analytics",
    params(("days" = i64, Path, description = "Look-back window in days")),
    responses(
        (status = 200, description = "Seller with the largest sales sum in the window", body = ApiResponse<SellerResponse>),
        (status = 400, description = "Days must be positive", body = ErrorResponse),
        (status = 404, description = "No sales in the window", body = ErrorResponse)
    )
)]
pub async fn get_most_productive_seller_by_days(
    Extension(service): Extension<DynSellerAnalyticsService>,
    Path(days): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.most_productive_by_days(days).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/analytics/low-performance",
    tag = "Seller Analytics",
    params(LowPerformanceQuery),
    responses(
        (status = 200, description = "Sellers whose sales sum is below the limit", body = ApiResponse<Vec<SellerResponse>>),
        (status = 400, description = "Invalid limit or period", body = ErrorResponse)
    )
)]
pub async fn get_low_performance_sellers(
    Extension(service): Extension<DynSellerAnalyticsService>,
    Query(params): Query<LowPerformanceQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.low_performance(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/sellers/analytics/most-productive-time/{seller_id}/{days}",
    tag = "Seller Analytics",
    params(
        ("seller_id" = i64, Path, description = "Seller ID"),
        ("days" = i64, Path, description = "Window length in active days")
    ),
    responses(
        (status = 200, description = "Densest run of active days", body = ApiResponse<ProductiveIntervalResponse>),
        (status = 400, description = "Days must be positive", body = ErrorResponse),
        (status = 404, description = "Seller unknown or without transactions", body = ErrorResponse)
    )
)]
pub async fn get_most_productive_time(
    Extension(service): Extension<DynSellerAnalyticsService>,
    Path((seller_id, days)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.most_productive_time(seller_id, days).await?;
    Ok(Json(response))
}

pub fn seller_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/sellers", get(get_sellers).post(create_seller))
        .route(
            "/api/sellers/{id}",
            get(get_seller).put(update_seller).delete(delete_seller),
        )
        .route(
            "/api/sellers/analytics/most-productive",
            get(get_most_productive_seller),
        )
        .route(
            "/api/sellers/analytics/most-productive/{days}",
            get(get_most_productive_seller_by_days),
        )
        .route(
            "/api/sellers/analytics/low-performance",
            get(get_low_performance_sellers),
        )
        .route(
            "/api/sellers/analytics/most-productive-time/{seller_id}/{days}",
            get(get_most_productive_time),
        )
        .layer(Extension(app_state.di_container.seller.query.clone()))
        .layer(Extension(app_state.di_container.seller.command.clone()))
        .layer(Extension(app_state.di_container.seller.analytics.clone()))
}
