use crate::{
    abstract_trait::DynStockStore,
    domain::{
        requests::stock::{
            CreateStockRequest, DEFAULT_LIMIT, FindAllStocks, QueryPagination, UpdateStockRequest,
        },
        response::stock::{StockMessageResponse, StockResponse, StocksResponse},
    },
    middleware::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

fn parse_stock_id(path: Result<Path<String>, PathRejection>) -> Result<i64, HttpError> {
    let Path(raw) = path.map_err(|_| HttpError::BadRequest("stock id not provided".into()))?;

    raw.parse::<i64>()
        .map_err(|e| HttpError::BadRequest(format!("stock id is not in correct format: {e}")))
}

fn parse_pagination(params: &FindAllStocks) -> Result<QueryPagination, HttpError> {
    let mut pagination = QueryPagination::new(0, DEFAULT_LIMIT);

    if let Some(limit) = &params.limit {
        pagination.limit = limit
            .parse::<i64>()
            .map_err(|e| HttpError::BadRequest(format!("limit parse err: {e}")))?;
    }

    if let Some(offset) = &params.offset {
        pagination.offset = offset
            .parse::<i64>()
            .map_err(|e| HttpError::BadRequest(format!("offset parse err: {e}")))?;
    }

    Ok(pagination)
}

#[utoipa::path(
    get,
    path = "/api/stocks",
    tag = "Stock",
    params(FindAllStocks),
    responses(
        (status = 200, description = "Page of stocks ordered by id", body = StocksResponse),
        (status = 400, description = "Malformed limit or offset", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_stocks(
    Extension(store): Extension<DynStockStore>,
    query: Result<Query<FindAllStocks>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(params) = query.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let pagination = parse_pagination(&params)?;

    let result = store.get_all_stocks(pagination).await?;
    Ok((StatusCode::OK, Json(StocksResponse::from(result))))
}

#[utoipa::path(
    get,
    path = "/api/stocks/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Stock details", body = StockResponse),
        (status = 400, description = "Malformed stock id", body = ErrorResponse),
        (status = 404, description = "Stock not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_stock(
    Extension(store): Extension<DynStockStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_stock_id(path)?;

    let stock = store.get_stock(id).await?;
    Ok((StatusCode::OK, Json(StockResponse::from(stock))))
}

#[utoipa::path(
    post,
    path = "/api/stocks",
    tag = "Stock",
    request_body = CreateStockRequest,
    responses(
        (status = 201, description = "Stock created", body = StockMessageResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_stock(
    Extension(store): Extension<DynStockStore>,
    ValidatedJson(body): ValidatedJson<CreateStockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = store.create_stock(&body).await?;
    Ok((StatusCode::CREATED, Json(StockMessageResponse::created(id))))
}

#[utoipa::path(
    put,
    path = "/api/stocks/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    request_body = UpdateStockRequest,
    responses(
        (status = 201, description = "Update applied; message carries the affected row count", body = StockMessageResponse),
        (status = 400, description = "Malformed stock id or validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_stock(
    Extension(store): Extension<DynStockStore>,
    path: Result<Path<String>, PathRejection>,
    body: Result<ValidatedJson<UpdateStockRequest>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    // A bad id wins over a bad body.
    let id = parse_stock_id(path)?;
    let ValidatedJson(body) = body?;

    let affected_rows = store.update_stock(id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(StockMessageResponse::updated(id, affected_rows)),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/stocks/{id}",
    tag = "Stock",
    params(("id" = i64, Path, description = "Stock ID")),
    responses(
        (status = 200, description = "Delete applied; message carries the deleted row count", body = StockMessageResponse),
        (status = 400, description = "Malformed stock id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_stock(
    Extension(store): Extension<DynStockStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_stock_id(path)?;

    let deleted_rows = store.delete_stock(id).await?;
    Ok((
        StatusCode::OK,
        Json(StockMessageResponse::deleted(id, deleted_rows)),
    ))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/stocks", get(get_stocks).post(create_stock))
        .route(
            "/api/stocks/{id}",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .layer(Extension(app_state.di_container.stock_store.clone()))
}
