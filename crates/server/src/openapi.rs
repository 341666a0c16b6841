use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CustomerInputDoc {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(utoipa::ToSchema)]
pub struct ProductInputDoc {
    pub product_name: String,
    pub price: f64,
}

#[derive(utoipa::ToSchema)]
pub struct OrderInputDoc {
    /// ISO date, YYYY-MM-DD
    pub order_date: String,
    pub customer_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::remove,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::remove,
        crate::routes::orders::create,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::remove,
        crate::routes::orders::add_product,
        crate::routes::orders::remove_product,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerInputDoc,
            ProductInputDoc,
            OrderInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "products"),
        (name = "orders"),
    )
)]
pub struct ApiDoc;
