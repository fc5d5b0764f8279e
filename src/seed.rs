use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    PaginatorTrait, QueryFilter, QueryTrait, Set, Statement, TransactionTrait, UpdateMany,
    sea_query::{Expr, Func, Query, SimpleExpr, SubQueryStatement},
};
use serde::Serialize;

use crate::{
    entity::{
        Addresses, Categories, Customers, OrderItems, OrderStatus, Orders, ProductCategories,
        Products, addresses, categories, customers, order_items, orders, product_categories,
        products,
    },
    error::{AppError, AppResult},
    money::format_cents,
};

/// The single order shipped with the seed rows.
pub const SEED_ORDER_ID: i32 = 1;

/// Tables with a serial key that the seed fills with explicit ids.
const SERIAL_TABLES: [&str; 5] = ["customers", "addresses", "categories", "products", "orders"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    AlreadySeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub customers: usize,
    pub addresses: usize,
    pub categories: usize,
    pub products: usize,
    pub product_categories: usize,
    pub orders: usize,
    pub order_items: usize,
    /// Total of the seeded order after the aggregate update, in cents.
    pub order_total: i64,
}

/// Inserts the seed rows and derives the seeded order's total, all in one
/// transaction. Does nothing when customers already exist.
pub async fn seed_database(conn: &DatabaseConnection) -> AppResult<SeedOutcome> {
    let existing = Customers::find().count(conn).await?;
    if existing > 0 {
        tracing::info!(customers = existing, "database already seeded, skipping");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let backend = conn.get_database_backend();
    let txn = conn.begin().await?;
    for statement in seed_statements(backend) {
        txn.execute(statement).await?;
    }
    txn.commit().await?;

    let order_total = Orders::find_by_id(SEED_ORDER_ID)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?
        .total_amount;

    let summary = SeedSummary {
        customers: seed_customers().len(),
        addresses: seed_addresses().len(),
        categories: seed_categories().len(),
        products: seed_products().len(),
        product_categories: seed_product_categories().len(),
        orders: 1,
        order_items: seed_order_items().len(),
        order_total,
    };
    tracing::info!(
        customers = summary.customers,
        products = summary.products,
        order_total = %format_cents(order_total),
        "seed data inserted"
    );
    Ok(SeedOutcome::Seeded(summary))
}

/// The seed inserts followed by the aggregate update of the seeded order.
pub fn seed_statements(backend: DbBackend) -> Vec<Statement> {
    let mut statements = vec![
        Customers::insert_many(seed_customers()).build(backend),
        Addresses::insert_many(seed_addresses()).build(backend),
        Categories::insert_many(seed_categories()).build(backend),
        Products::insert_many(seed_products()).build(backend),
        ProductCategories::insert_many(seed_product_categories()).build(backend),
        Orders::insert(seed_order()).build(backend),
        OrderItems::insert_many(seed_order_items()).build(backend),
        recompute_total_query(SEED_ORDER_ID).build(backend),
    ];

    // Explicit ids leave Postgres sequences behind; move them past the seed.
    if backend == DbBackend::Postgres {
        statements.extend(SERIAL_TABLES.iter().map(|table| {
            Statement::from_string(
                backend,
                format!(
                    "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM \"{table}\"))"
                ),
            )
        }));
    }

    statements
}

/// Overwrites `orders.total_amount` with the sum of the order's items and
/// returns the stored value. An order without items gets a total of zero.
pub async fn recompute_order_total<C>(conn: &C, order_id: i32) -> AppResult<i64>
where
    C: ConnectionTrait,
{
    // MySQL reports unchanged rows as unaffected, so check existence up front.
    if Orders::find_by_id(order_id).one(conn).await?.is_none() {
        return Err(AppError::NotFound);
    }
    recompute_total_query(order_id).exec(conn).await?;

    let order = Orders::find_by_id(order_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::debug!(order_id, total = %format_cents(order.total_amount), "order total recomputed");
    Ok(order.total_amount)
}

/// Sum of `quantity * unit_price` over an order's items, computed client side.
pub async fn items_total<C>(conn: &C, order_id: i32) -> AppResult<i64>
where
    C: ConnectionTrait,
{
    let items = OrderItems::find()
        .filter(order_items::Column::OrderId.eq(order_id))
        .all(conn)
        .await?;
    order_items::sum_line_totals(&items).ok_or(AppError::AmountOverflow { order_id })
}

fn recompute_total_query(order_id: i32) -> UpdateMany<Orders> {
    let items_sum = Query::select()
        .expr(Func::sum(
            Expr::col((OrderItems, order_items::Column::Quantity))
                .mul(Expr::col((OrderItems, order_items::Column::UnitPrice))),
        ))
        .from(OrderItems)
        .and_where(
            Expr::col((OrderItems, order_items::Column::OrderId))
                .equals((Orders, orders::Column::Id)),
        )
        .to_owned();

    let total: SimpleExpr = Func::coalesce([
        SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(items_sum))),
        Expr::val(0i64).into(),
    ])
    .into();

    Orders::update_many()
        .col_expr(orders::Column::TotalAmount, total)
        .filter(orders::Column::Id.eq(order_id))
}

fn seed_customers() -> Vec<customers::ActiveModel> {
    [
        (1, "Alice Johnson", "alice@example.com", Some("+1-555-0101")),
        (2, "Bob Smith", "bob@example.com", Some("+1-555-0102")),
        (3, "Carol Diaz", "carol@example.com", None),
    ]
    .into_iter()
    .map(|(id, name, email, phone)| customers::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(phone.map(str::to_string)),
        created_at: NotSet,
    })
    .collect()
}

fn seed_addresses() -> Vec<addresses::ActiveModel> {
    [
        (1, 1, "123 Main St", None, "Springfield", "62701", "USA"),
        (2, 2, "456 Oak Ave", Some("Apt 2B"), "Portland", "97201", "USA"),
        (3, 3, "789 Pine Rd", None, "Toronto", "M5V 2T6", "Canada"),
    ]
    .into_iter()
    .map(
        |(id, customer_id, line1, line2, city, postal_code, country)| addresses::ActiveModel {
            id: Set(id),
            customer_id: Set(customer_id),
            line1: Set(line1.to_string()),
            line2: Set(line2.map(str::to_string)),
            city: Set(city.to_string()),
            postal_code: Set(Some(postal_code.to_string())),
            country: Set(country.to_string()),
            is_default: Set(true),
        },
    )
    .collect()
}

fn seed_categories() -> Vec<categories::ActiveModel> {
    [
        (1, "Electronics", "Computers, peripherals and gadgets"),
        (2, "Accessories", "Add-ons for your devices"),
        (3, "Books", "Printed and digital books"),
    ]
    .into_iter()
    .map(|(id, name, description)| categories::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
    })
    .collect()
}

fn seed_products() -> Vec<products::ActiveModel> {
    [
        (1, "LAP-001", "Laptop Pro 14", 120_000, 10),
        (2, "MOU-001", "Wireless Mouse", 2_500, 200),
        (3, "KEY-001", "Mechanical Keyboard", 8_999, 50),
        (4, "BOOK-RUST", "The Rust Programming Language", 3_995, 30),
        (5, "HDP-001", "Noise Cancelling Headphones", 14_950, 25),
    ]
    .into_iter()
    .map(|(id, sku, name, price, stock)| products::ActiveModel {
        id: Set(id),
        sku: Set(sku.to_string()),
        name: Set(name.to_string()),
        description: Set(None),
        price: Set(price),
        stock: Set(stock),
        created_at: NotSet,
    })
    .collect()
}

fn seed_product_categories() -> Vec<product_categories::ActiveModel> {
    [(1, 1), (2, 1), (2, 2), (3, 2), (4, 3), (5, 1)]
        .into_iter()
        .map(|(product_id, category_id)| product_categories::ActiveModel {
            product_id: Set(product_id),
            category_id: Set(category_id),
        })
        .collect()
}

fn seed_order() -> orders::ActiveModel {
    orders::ActiveModel {
        id: Set(SEED_ORDER_ID),
        customer_id: Set(1),
        status: Set(OrderStatus::Pending),
        total_amount: Set(0),
        shipping_address_id: Set(Some(1)),
        billing_address_id: Set(Some(1)),
        created_at: NotSet,
    }
}

fn seed_order_items() -> Vec<order_items::ActiveModel> {
    [(1, 2, 120_000), (2, 1, 2_500)]
        .into_iter()
        .map(|(product_id, quantity, unit_price)| order_items::ActiveModel {
            order_id: Set(SEED_ORDER_ID),
            product_id: Set(product_id),
            quantity: Set(quantity),
            unit_price: Set(unit_price),
        })
        .collect()
}
