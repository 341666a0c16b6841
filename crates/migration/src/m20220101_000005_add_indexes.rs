use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Order: index on customer_id
        manager
            .create_index(
                Index::create()
                    .name("idx_order_customer")
                    .table(Order::Table)
                    .col(Order::CustomerId)
                    .to_owned(),
            )
            .await?;

        // OrderProduct: index on product_id for reverse lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_order_product_product")
                    .table(OrderProduct::Table)
                    .col(OrderProduct::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_order_customer").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_product_product").table(OrderProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Order { Table, CustomerId }

#[derive(DeriveIden)]
enum OrderProduct { Table, ProductId }
