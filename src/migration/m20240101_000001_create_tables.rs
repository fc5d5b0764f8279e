use sea_orm::{ActiveEnum, Iterable};
use sea_orm_migration::prelude::*;

use crate::entity::{OrderStatus, PaymentMethod, UserRole};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in create_statements() {
            manager.create_table(table).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in drop_statements() {
            manager.drop_table(table).await?;
        }
        Ok(())
    }
}

/// Table definitions in dependency order: every referenced table comes
/// before the tables pointing at it.
pub(crate) fn create_statements() -> Vec<TableCreateStatement> {
    vec![
        customers(),
        addresses(),
        categories(),
        products(),
        product_categories(),
        orders(),
        order_items(),
        payments(),
        reviews(),
        users(),
    ]
}

pub(crate) fn drop_statements() -> Vec<TableDropStatement> {
    vec![
        Table::drop().table(Users::Table).if_exists().to_owned(),
        Table::drop().table(Reviews::Table).if_exists().to_owned(),
        Table::drop().table(Payments::Table).if_exists().to_owned(),
        Table::drop().table(OrderItems::Table).if_exists().to_owned(),
        Table::drop().table(Orders::Table).if_exists().to_owned(),
        Table::drop()
            .table(ProductCategories::Table)
            .if_exists()
            .to_owned(),
        Table::drop().table(Products::Table).if_exists().to_owned(),
        Table::drop().table(Categories::Table).if_exists().to_owned(),
        Table::drop().table(Addresses::Table).if_exists().to_owned(),
        Table::drop().table(Customers::Table).if_exists().to_owned(),
    ]
}

fn customers() -> TableCreateStatement {
    Table::create()
        .table(Customers::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Customers::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Customers::Name).string_len(100).not_null())
        .col(
            ColumnDef::new(Customers::Email)
                .string_len(255)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Customers::Phone).string_len(20).null())
        .col(
            ColumnDef::new(Customers::CreatedAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn addresses() -> TableCreateStatement {
    Table::create()
        .table(Addresses::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Addresses::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Addresses::CustomerId).integer().not_null())
        .col(ColumnDef::new(Addresses::Line1).string_len(255).not_null())
        .col(ColumnDef::new(Addresses::Line2).string_len(255).null())
        .col(ColumnDef::new(Addresses::City).string_len(100).not_null())
        .col(ColumnDef::new(Addresses::PostalCode).string_len(20).null())
        .col(ColumnDef::new(Addresses::Country).string_len(100).not_null())
        .col(
            ColumnDef::new(Addresses::IsDefault)
                .boolean()
                .not_null()
                .default(false),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_addresses_customer_id")
                .from(Addresses::Table, Addresses::CustomerId)
                .to(Customers::Table, Customers::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn categories() -> TableCreateStatement {
    Table::create()
        .table(Categories::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Categories::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Categories::Name)
                .string_len(100)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Categories::Description).text().null())
        .to_owned()
}

fn products() -> TableCreateStatement {
    Table::create()
        .table(Products::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Products::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Products::Sku)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Products::Name).string_len(200).not_null())
        .col(ColumnDef::new(Products::Description).text().null())
        .col(ColumnDef::new(Products::Price).big_integer().not_null())
        .col(
            ColumnDef::new(Products::Stock)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Products::CreatedAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn product_categories() -> TableCreateStatement {
    Table::create()
        .table(ProductCategories::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(ProductCategories::ProductId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductCategories::CategoryId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(ProductCategories::ProductId)
                .col(ProductCategories::CategoryId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_categories_product_id")
                .from(ProductCategories::Table, ProductCategories::ProductId)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_categories_category_id")
                .from(ProductCategories::Table, ProductCategories::CategoryId)
                .to(Categories::Table, Categories::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn orders() -> TableCreateStatement {
    Table::create()
        .table(Orders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Orders::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Orders::CustomerId).integer().not_null())
        .col(
            ColumnDef::new(Orders::Status)
                .string_len(16)
                .not_null()
                .default(OrderStatus::Pending.to_value())
                .check(Expr::col(Orders::Status).is_in(domain::<OrderStatus>())),
        )
        .col(
            ColumnDef::new(Orders::TotalAmount)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Orders::ShippingAddressId).integer().null())
        .col(ColumnDef::new(Orders::BillingAddressId).integer().null())
        .col(
            ColumnDef::new(Orders::CreatedAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_customer_id")
                .from(Orders::Table, Orders::CustomerId)
                .to(Customers::Table, Customers::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_shipping_address_id")
                .from(Orders::Table, Orders::ShippingAddressId)
                .to(Addresses::Table, Addresses::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_orders_billing_address_id")
                .from(Orders::Table, Orders::BillingAddressId)
                .to(Addresses::Table, Addresses::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn order_items() -> TableCreateStatement {
    Table::create()
        .table(OrderItems::Table)
        .if_not_exists()
        .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
        .col(ColumnDef::new(OrderItems::ProductId).integer().not_null())
        .col(
            ColumnDef::new(OrderItems::Quantity)
                .integer()
                .not_null()
                .check(Expr::col(OrderItems::Quantity).gt(0)),
        )
        .col(ColumnDef::new(OrderItems::UnitPrice).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(OrderItems::OrderId)
                .col(OrderItems::ProductId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_items_order_id")
                .from(OrderItems::Table, OrderItems::OrderId)
                .to(Orders::Table, Orders::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_order_items_product_id")
                .from(OrderItems::Table, OrderItems::ProductId)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn payments() -> TableCreateStatement {
    Table::create()
        .table(Payments::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Payments::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Payments::OrderId).integer().not_null())
        .col(ColumnDef::new(Payments::Amount).big_integer().not_null())
        .col(
            ColumnDef::new(Payments::Method)
                .string_len(20)
                .not_null()
                .check(Expr::col(Payments::Method).is_in(domain::<PaymentMethod>())),
        )
        .col(
            ColumnDef::new(Payments::PaidAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_payments_order_id")
                .from(Payments::Table, Payments::OrderId)
                .to(Orders::Table, Orders::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn reviews() -> TableCreateStatement {
    Table::create()
        .table(Reviews::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Reviews::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Reviews::ProductId).integer().not_null())
        .col(ColumnDef::new(Reviews::CustomerId).integer().null())
        .col(
            ColumnDef::new(Reviews::Rating)
                .integer()
                .not_null()
                .check(Expr::col(Reviews::Rating).between(1, 5)),
        )
        .col(ColumnDef::new(Reviews::Comment).text().null())
        .col(
            ColumnDef::new(Reviews::CreatedAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_reviews_product_id")
                .from(Reviews::Table, Reviews::ProductId)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_reviews_customer_id")
                .from(Reviews::Table, Reviews::CustomerId)
                .to(Customers::Table, Customers::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn users() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Users::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Users::Username)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Users::PasswordHash)
                .string_len(255)
                .not_null(),
        )
        .col(
            ColumnDef::new(Users::Role)
                .string_len(16)
                .not_null()
                .default(UserRole::Viewer.to_value())
                .check(Expr::col(Users::Role).is_in(domain::<UserRole>())),
        )
        .col(
            ColumnDef::new(Users::CreatedAt)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

/// Every string value of an enum column, for its CHECK constraint.
fn domain<E>() -> Vec<String>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::iter().map(|variant| variant.to_value()).collect()
}

#[derive(DeriveIden)]
pub(crate) enum Customers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Addresses {
    Table,
    Id,
    CustomerId,
    Line1,
    Line2,
    City,
    PostalCode,
    Country,
    IsDefault,
}

#[derive(DeriveIden)]
pub(crate) enum Categories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub(crate) enum Products {
    Table,
    Id,
    Sku,
    Name,
    Description,
    Price,
    Stock,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum ProductCategories {
    Table,
    ProductId,
    CategoryId,
}

#[derive(DeriveIden)]
pub(crate) enum Orders {
    Table,
    Id,
    CustomerId,
    Status,
    TotalAmount,
    ShippingAddressId,
    BillingAddressId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum OrderItems {
    Table,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    OrderId,
    Amount,
    Method,
    PaidAt,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    ProductId,
    CustomerId,
    Rating,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
}
