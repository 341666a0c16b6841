//! Create `order_product` junction table.
//!
//! The composite primary key doubles as the uniqueness constraint on the
//! (order_id, product_id) pair; rows cascade away with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderProduct::Table)
                    .if_not_exists()
                    .col(integer(OrderProduct::OrderId).not_null())
                    .col(integer(OrderProduct::ProductId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_order_product")
                            .col(OrderProduct::OrderId)
                            .col(OrderProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_order")
                            .from(OrderProduct::Table, OrderProduct::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_product")
                            .from(OrderProduct::Table, OrderProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderProduct::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderProduct { Table, OrderId, ProductId }

#[derive(DeriveIden)]
enum Order { Table, Id }

#[derive(DeriveIden)]
enum Product { Table, Id }
