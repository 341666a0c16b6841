/// Database connection and configuration tests
pub mod db_tests;


/// Integration tests combining multiple entities
pub mod integration_tests {
    use crate::db::connect;
    use crate::{customer, order, order_product, product};
    use anyhow::Result;
    use chrono::NaiveDate;
    use migration::MigratorTrait;
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};
    use uuid::Uuid;

    /// Test complete workflow: customer -> order -> association -> product
    #[tokio::test]
    async fn test_complete_workflow() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = match connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        migration::Migrator::up(&db, None).await?;

        let c = customer::create(
            &db,
            &format!("Workflow Customer {}", Uuid::new_v4()),
            "workflow@example.com",
            "1 Workflow Way",
        )
        .await?;
        let p = product::create(&db, &format!("Workflow Product {}", Uuid::new_v4()), 19.99).await?;
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let o = order::create(&db, date, c.id).await?;

        let link = order_product::ActiveModel {
            order_id: Set(o.id),
            product_id: Set(p.id),
        };
        link.insert(&db).await?;

        let found = order_product::Entity::find_by_id((o.id, p.id)).one(&db).await?;
        assert!(found.is_some());

        // Deleting the customer cascades to the order and its association rows
        customer::Entity::delete_by_id(c.id).exec(&db).await?;
        let order_after = order::Entity::find_by_id(o.id).one(&db).await?;
        assert!(order_after.is_none());
        let link_after = order_product::Entity::find_by_id((o.id, p.id)).one(&db).await?;
        assert!(link_after.is_none());

        // The product itself is untouched
        let product_after = product::Entity::find_by_id(p.id).one(&db).await?;
        assert!(product_after.is_some());

        product::Entity::delete_by_id(p.id).exec(&db).await?;
        Ok(())
    }

    /// Duplicate association pairs are rejected by the composite primary key
    #[tokio::test]
    async fn test_duplicate_association_rejected() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = match connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };
        migration::Migrator::up(&db, None).await?;

        let c = customer::create(&db, &format!("Dup Customer {}", Uuid::new_v4()), "dup@example.com", "2 Dup St").await?;
        let p = product::create(&db, &format!("Dup Product {}", Uuid::new_v4()), 5.0).await?;
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date");
        let o = order::create(&db, date, c.id).await?;

        let first = order_product::ActiveModel { order_id: Set(o.id), product_id: Set(p.id) };
        first.insert(&db).await?;

        let second = order_product::ActiveModel { order_id: Set(o.id), product_id: Set(p.id) };
        assert!(second.insert(&db).await.is_err());

        customer::Entity::delete_by_id(c.id).exec(&db).await?;
        product::Entity::delete_by_id(p.id).exec(&db).await?;
        Ok(())
    }
}
