use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use common::pagination::Page;
use service::db::product_service;

use crate::errors::ApiError;
use crate::payload::ProductPayload;
use crate::routes::customers::ListQuery;
use crate::routes::AppState;

#[utoipa::path(post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<models::product::Model>), ApiError> {
    let payload = ProductPayload::from_value(&body)?;
    let created =
        product_service::create_product(&state.db, &payload.product_name, payload.price).await?;
    info!(id = created.id, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/products", tag = "products",
    params(ListQuery),
    responses((status = 200, description = "Paginated product list")))]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page<models::product::Model>>, ApiError> {
    let page = product_service::list_products_paginated(&state.db, q.pagination()).await?;
    Ok(Json(page))
}

#[utoipa::path(get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::product::Model>, ApiError> {
    match product_service::get_product(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound("product not found".into())),
    }
}

#[utoipa::path(put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Unknown id or invalid payload")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<models::product::Model>, ApiError> {
    let payload = ProductPayload::from_value(&body)?;
    let updated =
        product_service::update_product(&state.db, id, &payload.product_name, payload.price).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses((status = 200, description = "Deleted"), (status = 400, description = "Unknown id")))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    product_service::delete_product(&state.db, id).await?;
    info!(id, "deleted product");
    Ok(Json(serde_json::json!({
        "message": format!("successfully deleted product {}", id)
    })))
}
