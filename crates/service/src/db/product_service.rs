use models::product;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::errors::ServiceError;
use common::pagination::{Page, Pagination};

/// Create a product.
pub async fn create_product(
    db: &DatabaseConnection,
    product_name: &str,
    price: f64,
) -> Result<product::Model, ServiceError> {
    Ok(product::create(db, product_name, price).await?)
}

/// Get product by id.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<Option<product::Model>, ServiceError> {
    Ok(product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// List products with pagination and count metadata.
pub async fn list_products_paginated(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Page<product::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let paginator = product::Entity::find()
        .order_by_asc(product::Column::Id)
        .paginate(db, per_page);
    let total = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let pages = paginator.num_pages().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page { items, total, pages, current_page: opts.current_page() })
}

/// Update product; all mutable fields are replaced.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    product_name: &str,
    price: f64,
) -> Result<product::Model, ServiceError> {
    let mut am: product::ActiveModel = product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::InvalidReference("invalid product id".into()))?
        .into();
    if product_name.trim().is_empty() {
        return Err(ServiceError::Validation("product_name required".into()));
    }
    if price < 0.0 {
        return Err(ServiceError::Validation("price must be non-negative".into()));
    }
    am.product_name = Set(product_name.to_string());
    am.price = Set(price);
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete product. Unknown ids are reported, not ignored.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Err(ServiceError::InvalidReference("invalid product id".into()));
    }
    product::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let name = format!("svc_product_{}", Uuid::new_v4());
        let p = create_product(&db, &name, 12.50).await?;
        let found = get_product(&db, p.id).await?.expect("created product");
        assert_eq!(found.product_name, name);
        assert_eq!(found.price, 12.50);

        let updated = update_product(&db, p.id, &name, 15.00).await?;
        assert_eq!(updated.price, 15.00);

        let bad = update_product(&db, p.id, &name, -3.0).await;
        assert!(matches!(bad, Err(ServiceError::Validation(_))));

        let page1 = list_products_paginated(&db, Pagination { page: 1, per_page: 10 }).await?;
        assert!(page1.total >= 1);

        delete_product(&db, p.id).await?;
        assert!(get_product(&db, p.id).await?.is_none());
        Ok(())
    }
}
