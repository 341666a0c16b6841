use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use service::db::order_service;

use crate::errors::ApiError;
use crate::payload::OrderPayload;
use crate::routes::AppState;

#[utoipa::path(post, path = "/orders", tag = "orders",
    request_body = crate::openapi::OrderInputDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation error or invalid customer id")))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<models::order::Model>), ApiError> {
    let payload = OrderPayload::from_value(&body)?;
    let created =
        order_service::create_order(&state.db, payload.order_date, payload.customer_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// All orders, unpaginated, as a bare array.
#[utoipa::path(get, path = "/orders", tag = "orders",
    responses((status = 200, description = "All orders")))]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::order::Model>>, ApiError> {
    let orders = order_service::list_orders(&state.db).await?;
    Ok(Json(orders))
}

#[utoipa::path(get, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::order::Model>, ApiError> {
    match order_service::get_order(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound("order not found".into())),
    }
}

#[utoipa::path(delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    responses((status = 200, description = "Deleted"), (status = 400, description = "Unknown id")))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    order_service::delete_order(&state.db, id).await?;
    info!(id, "deleted order");
    Ok(Json(serde_json::json!({
        "message": format!("successfully deleted order {}", id)
    })))
}

#[utoipa::path(put, path = "/orders/{order_id}/add_product/{product_id}", tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses((status = 200, description = "Added"), (status = 400, description = "Invalid ids or duplicate")))]
pub async fn add_product(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    order_service::add_product_to_order(&state.db, order_id, product_id).await?;
    Ok(Json(serde_json::json!({
        "message": "successfully added item to order"
    })))
}

#[utoipa::path(delete, path = "/orders/{order_id}/remove_product/{product_id}", tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses((status = 200, description = "Removed"), (status = 400, description = "Invalid ids or not present")))]
pub async fn remove_product(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    order_service::remove_product_from_order(&state.db, order_id, product_id).await?;
    Ok(Json(serde_json::json!({
        "message": "successfully removed item from order"
    })))
}
