//! Create `order` table with FK to `customer`.
//!
//! Deleting a customer removes its orders (CASCADE).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(date(Order::OrderDate).not_null())
                    .col(integer(Order::CustomerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer")
                            .from(Order::Table, Order::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order { Table, Id, OrderDate, CustomerId }

#[derive(DeriveIden)]
enum Customer { Table, Id }
