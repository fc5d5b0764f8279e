#![allow(dead_code)]

use ecommerce_schema::{
    db::run_migrations,
    entity::{customers, order_items, orders, products},
    error::{AppError, ConstraintKind},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectOptions, Database, DatabaseConnection, DbErr,
    Set,
};

/// Fresh in-memory database with the schema applied. One pooled connection,
/// since every SQLite memory connection is its own database.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    run_migrations(&conn).await?;
    Ok(conn)
}

pub fn constraint_kind<T: std::fmt::Debug>(result: Result<T, DbErr>) -> ConstraintKind {
    let err = AppError::from(result.expect_err("statement should be rejected"));
    err.constraint_kind()
        .unwrap_or_else(|| panic!("expected a constraint violation, got {err:?}"))
}

pub async fn create_customer(conn: &DatabaseConnection, email: &str) -> anyhow::Result<i32> {
    let customer = customers::ActiveModel {
        id: NotSet,
        name: Set("Test Customer".into()),
        email: Set(email.to_string()),
        phone: Set(None),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;
    Ok(customer.id)
}

pub async fn create_product(
    conn: &DatabaseConnection,
    sku: &str,
    price: i64,
) -> anyhow::Result<i32> {
    let product = products::ActiveModel {
        id: NotSet,
        sku: Set(sku.to_string()),
        name: Set(format!("Product {sku}")),
        description: Set(None),
        price: Set(price),
        stock: Set(10),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;
    Ok(product.id)
}

pub async fn create_order(conn: &DatabaseConnection, customer_id: i32) -> anyhow::Result<i32> {
    let order = orders::ActiveModel {
        id: NotSet,
        customer_id: Set(customer_id),
        status: NotSet,
        total_amount: NotSet,
        shipping_address_id: Set(None),
        billing_address_id: Set(None),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;
    Ok(order.id)
}

pub fn order_item(order_id: i32, product_id: i32, quantity: i32, unit_price: i64) -> order_items::ActiveModel {
    order_items::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
    }
}
