use chrono::NaiveDate;
use models::{customer, order, order_product, product};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::errors::ServiceError;

/// Create an order after confirming the customer exists.
pub async fn create_order(
    db: &DatabaseConnection,
    order_date: NaiveDate,
    customer_id: i32,
) -> Result<order::Model, ServiceError> {
    let customer = customer::Entity::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if customer.is_none() {
        return Err(ServiceError::InvalidReference("invalid customer id".into()));
    }
    let created = order::create(db, order_date, customer_id).await?;
    info!(order_id = created.id, customer_id, "created order");
    Ok(created)
}

/// List all orders, unpaginated.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> {
    Ok(order::Entity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Get order by id.
pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<Option<order::Model>, ServiceError> {
    Ok(order::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Delete order and, via cascade, its association rows.
pub async fn delete_order(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = order::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Err(ServiceError::InvalidReference("invalid order id".into()));
    }
    order::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

/// Products currently linked to an order.
pub async fn list_order_products(
    db: &DatabaseConnection,
    order_id: i32,
) -> Result<Vec<order_product::Model>, ServiceError> {
    use sea_orm::{ColumnTrait, QueryFilter};
    Ok(order_product::Entity::find()
        .filter(order_product::Column::OrderId.eq(order_id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// Link a product to an order. Rejects unknown ids and duplicate pairs.
pub async fn add_product_to_order(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
) -> Result<(), ServiceError> {
    let order = order::Entity::find_by_id(order_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let product = product::Entity::find_by_id(product_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if order.is_none() || product.is_none() {
        return Err(ServiceError::InvalidReference("invalid order id or product id".into()));
    }

    let existing = order_product::Entity::find_by_id((order_id, product_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_some() {
        return Err(ServiceError::Validation("item is already included in this order".into()));
    }

    let am = order_product::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(product_id),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(order_id, product_id, "added product to order");
    Ok(())
}

/// Unlink a product from an order. Rejects unknown ids and absent pairs.
pub async fn remove_product_from_order(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
) -> Result<(), ServiceError> {
    let order = order::Entity::find_by_id(order_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let product = product::Entity::find_by_id(product_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if order.is_none() || product.is_none() {
        return Err(ServiceError::InvalidReference("invalid order id or product id".into()));
    }

    let existing = order_product::Entity::find_by_id((order_id, product_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Err(ServiceError::Validation("item isn't included in this order".into()));
    }

    order_product::Entity::delete_by_id((order_id, product_id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(order_id, product_id, "removed product from order");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::customer;
    use sea_orm::EntityTrait;
    use uuid::Uuid;

    async fn fixture(db: &sea_orm::DatabaseConnection) -> Result<(customer::Model, models::product::Model), anyhow::Error> {
        let c = customer::create(
            db,
            &format!("svc_order_customer_{}", Uuid::new_v4()),
            "orders@example.com",
            "9 Depot St",
        )
        .await?;
        let p = models::product::create(db, &format!("svc_order_product_{}", Uuid::new_v4()), 3.25).await?;
        Ok((c, p))
    }

    #[tokio::test]
    async fn order_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let (c, p) = fixture(&db).await?;

        let date = NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date");
        let o = create_order(&db, date, c.id).await?;
        assert_eq!(o.customer_id, c.id);
        assert_eq!(o.order_date, date);

        let found = get_order(&db, o.id).await?.expect("created order");
        assert_eq!(found.id, o.id);

        let all = list_orders(&db).await?;
        assert!(all.iter().any(|m| m.id == o.id));

        delete_order(&db, o.id).await?;
        assert!(get_order(&db, o.id).await?.is_none());

        customer::Entity::delete_by_id(c.id).exec(&db).await?;
        models::product::Entity::delete_by_id(p.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_order_rejects_unknown_customer() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let date = NaiveDate::from_ymd_opt(2024, 5, 21).expect("valid date");
        let res = create_order(&db, date, i32::MAX).await;
        assert!(matches!(res, Err(ServiceError::InvalidReference(_))));
        Ok(())
    }

    #[tokio::test]
    async fn association_add_and_remove() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let (c, p) = fixture(&db).await?;
        let date = NaiveDate::from_ymd_opt(2024, 5, 22).expect("valid date");
        let o = create_order(&db, date, c.id).await?;

        // add, then duplicate add rejected
        add_product_to_order(&db, o.id, p.id).await?;
        let dup = add_product_to_order(&db, o.id, p.id).await;
        assert!(matches!(dup, Err(ServiceError::Validation(_))));
        assert_eq!(list_order_products(&db, o.id).await?.len(), 1);

        // remove, then no-op remove rejected
        remove_product_from_order(&db, o.id, p.id).await?;
        let absent = remove_product_from_order(&db, o.id, p.id).await;
        assert!(matches!(absent, Err(ServiceError::Validation(_))));
        assert!(list_order_products(&db, o.id).await?.is_empty());

        // unknown ids rejected
        let bad = add_product_to_order(&db, o.id, i32::MAX).await;
        assert!(matches!(bad, Err(ServiceError::InvalidReference(_))));

        customer::Entity::delete_by_id(c.id).exec(&db).await?;
        models::product::Entity::delete_by_id(p.id).exec(&db).await?;
        Ok(())
    }
}
