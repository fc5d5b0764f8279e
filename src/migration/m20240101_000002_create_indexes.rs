use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_tables::{OrderItems, Orders, Products};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in create_statements() {
            manager.create_index(index).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_order_items_product_id")
                    .table(OrderItems::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_orders_customer_id")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_price")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await
    }
}

pub(crate) fn create_statements() -> Vec<IndexCreateStatement> {
    vec![
        // Range filters on price
        Index::create()
            .name("idx_products_price")
            .table(Products::Table)
            .col(Products::Price)
            .to_owned(),
        Index::create()
            .name("idx_orders_customer_id")
            .table(Orders::Table)
            .col(Orders::CustomerId)
            .to_owned(),
        Index::create()
            .name("idx_order_items_product_id")
            .table(OrderItems::Table)
            .col(OrderItems::ProductId)
            .to_owned(),
    ]
}
