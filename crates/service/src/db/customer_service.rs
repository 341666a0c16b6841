use models::customer;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::errors::ServiceError;
use common::pagination::{Page, Pagination};

/// Create a customer.
pub async fn create_customer(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    address: &str,
) -> Result<customer::Model, ServiceError> {
    Ok(customer::create(db, name, email, address).await?)
}

/// Get customer by id.
pub async fn get_customer(db: &DatabaseConnection, id: i32) -> Result<Option<customer::Model>, ServiceError> {
    Ok(customer::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// List customers with pagination and count metadata.
///
/// A page index past the end yields an empty item list.
pub async fn list_customers_paginated(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Page<customer::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let paginator = customer::Entity::find()
        .order_by_asc(customer::Column::Id)
        .paginate(db, per_page);
    let total = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let pages = paginator.num_pages().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page { items, total, pages, current_page: opts.current_page() })
}

/// Update customer; all mutable fields are replaced.
pub async fn update_customer(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    email: &str,
    address: &str,
) -> Result<customer::Model, ServiceError> {
    let mut am: customer::ActiveModel = customer::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::InvalidReference("invalid customer id".into()))?
        .into();
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name required".into()));
    }
    am.name = Set(name.to_string());
    am.email = Set(email.to_string());
    am.address = Set(address.to_string());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete customer. Unknown ids are reported, not ignored.
pub async fn delete_customer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = customer::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Err(ServiceError::InvalidReference("invalid customer id".into()));
    }
    customer::Entity::delete_by_id(id)
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
    async fn customer_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let name = format!("svc_customer_{}", Uuid::new_v4());
        let c = create_customer(&db, &name, "svc@example.com", "7 Service Ln").await?;
        let found = get_customer(&db, c.id).await?.expect("created customer");
        assert_eq!(found.name, name);

        let updated = update_customer(&db, c.id, &name, "new@example.com", "8 Updated Rd").await?;
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.address, "8 Updated Rd");

        // pagination
        let page1 = list_customers_paginated(&db, Pagination { page: 1, per_page: 10 }).await?;
        assert!(page1.total >= 1);
        assert!(!page1.items.is_empty());
        assert_eq!(page1.current_page, 1);

        // far page is empty, not an error
        let far = list_customers_paginated(&db, Pagination { page: 100_000, per_page: 10 }).await?;
        assert!(far.items.is_empty());

        delete_customer(&db, c.id).await?;
        let after = get_customer(&db, c.id).await?;
        assert!(after.is_none());

        // second delete reports the unknown id
        let missing = delete_customer(&db, c.id).await;
        assert!(matches!(missing, Err(ServiceError::InvalidReference(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_customer_is_invalid_reference() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let res = update_customer(&db, i32::MAX, "Name", "e@example.com", "addr").await;
        assert!(matches!(res, Err(ServiceError::InvalidReference(_))));
        Ok(())
    }
}
