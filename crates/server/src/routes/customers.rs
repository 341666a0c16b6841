use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use common::pagination::{Page, Pagination};
use service::db::customer_service;

use crate::errors::ApiError;
use crate::payload::CustomerPayload;
use crate::routes::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListQuery {
    /// Unparseable values fall back to the defaults rather than erroring.
    pub fn pagination(&self) -> Pagination {
        let defaults = Pagination::default();
        Pagination {
            page: self.page.as_deref().and_then(|v| v.parse().ok()).unwrap_or(defaults.page),
            per_page: self
                .per_page
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.per_page),
        }
    }
}

#[utoipa::path(post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<models::customer::Model>), ApiError> {
    let payload = CustomerPayload::from_value(&body)?;
    let created =
        customer_service::create_customer(&state.db, &payload.name, &payload.email, &payload.address)
            .await?;
    info!(id = created.id, "created customer");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/customers", tag = "customers",
    params(ListQuery),
    responses((status = 200, description = "Paginated customer list")))]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Page<models::customer::Model>>, ApiError> {
    let page = customer_service::list_customers_paginated(&state.db, q.pagination()).await?;
    Ok(Json(page))
}

#[utoipa::path(get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::customer::Model>, ApiError> {
    match customer_service::get_customer(&state.db, id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ApiError::NotFound("customer not found".into())),
    }
}

#[utoipa::path(put, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Unknown id or invalid payload")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Json<models::customer::Model>, ApiError> {
    let payload = CustomerPayload::from_value(&body)?;
    let updated = customer_service::update_customer(
        &state.db,
        id,
        &payload.name,
        &payload.email,
        &payload.address,
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses((status = 200, description = "Deleted"), (status = 400, description = "Unknown id")))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    customer_service::delete_customer(&state.db, id).await?;
    info!(id, "deleted customer");
    Ok(Json(serde_json::json!({
        "message": format!("successfully deleted customer {}", id)
    })))
}
