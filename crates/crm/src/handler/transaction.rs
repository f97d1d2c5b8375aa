use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::transaction::service::{
        command::DynTransactionCommandService, query::DynTransactionQueryService,
        stats::DynTransactionStatsService,
    },
    domain::{
        requests::{CreateTransactionRequest, PeriodQuery, UpdateTransactionRequest},
        responses::{
            ApiResponse, SalesStatisticsResponse, SellerTotalAmountResponse, TransactionResponse,
        },
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transaction",
    responses(
        (status = 200, description = "List of transactions", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction details", body = ApiResponse<TransactionResponse>),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
pub async fn get_transaction(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/transactions/seller/{seller_id}",
    tag = "Transaction",
    params(
        ("seller_id" = i64, Path, description = "Seller ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Transactions of one seller", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 400, description = "Incomplete or inverted period", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn get_transactions_by_seller(
    Extension(service): Extension<DynTransactionQueryService>,
    Path(seller_id): Path<i64>,
    Query(params): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_seller(seller_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transaction",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn create_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction updated", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Transaction or seller not found", body = ErrorResponse)
    )
)]
pub async fn update_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateTransactionRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "Transaction",
    params(("id" = i64, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction deleted", body = ApiResponse<bool>),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
pub async fn delete_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/transactions/analytics/total/{seller_id}",
    tag = "Transaction Analytics",
    params(
        ("seller_id" = i64, Path, description = "Seller ID"),
        PeriodQuery
    ),
    responses(
        (status = 200, description = "Exact sales sum of one seller", body = ApiResponse<SellerTotalAmountResponse>),
        (status = 400, description = "Incomplete or inverted period", body = ErrorResponse),
        (status = 404, description = "Seller not found", body = ErrorResponse)
    )
)]
pub async fn get_total_amount(
    Extension(service): Extension<DynTransactionStatsService>,
    Path(seller_id): Path<i64>,
    Query(params): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.total_amount(seller_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/transactions/analytics/statistics",
    tag = "Transaction Analytics",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Total sales and seller ranking", body = ApiResponse<SalesStatisticsResponse>),
        (status = 400, description = "Incomplete or inverted period", body = ErrorResponse)
    )
)]
pub async fn get_sales_statistics(
    Extension(service): Extension<DynTransactionStatsService>,
    Query(params): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.sales_statistics(&params).await?;
    Ok(Json(response))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route(
            "/api/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route(
            "/api/transactions/seller/{seller_id}",
            get(get_transactions_by_seller),
        )
        .route(
            "/api/transactions/analytics/total/{seller_id}",
            get(get_total_amount),
        )
        .route(
            "/api/transactions/analytics/statistics",
            get(get_sales_statistics),
        )
        .layer(Extension(app_state.di_container.transaction.query.clone()))
        .layer(Extension(app_state.di_container.transaction.command.clone()))
        .layer(Extension(app_state.di_container.transaction.stats.clone()))
}
