mod common;

use common::{constraint_kind, create_customer, create_order, create_product, order_item, setup_db};
use ecommerce_schema::{
    entity::{
        OrderStatus, PaymentMethod, UserRole, categories, customers, orders, payments, reviews,
        users,
    },
    error::ConstraintKind,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, EntityTrait, Set,
    Statement,
};

fn review(product_id: i32, customer_id: Option<i32>, rating: i32) -> reviews::ActiveModel {
    reviews::ActiveModel {
        id: NotSet,
        product_id: Set(product_id),
        customer_id: Set(customer_id),
        rating: Set(rating),
        comment: Set(None),
        created_at: NotSet,
    }
}

async fn exec_raw(conn: &DatabaseConnection, sql: &str) -> Result<(), sea_orm::DbErr> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(backend, sql)).await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_customer_email_is_rejected() -> anyhow::Result<()> {
    let db = setup_db().await?;
    create_customer(&db, "dup@example.com").await?;

    let second = customers::ActiveModel {
        id: NotSet,
        name: Set("Someone Else".into()),
        email: Set("dup@example.com".into()),
        phone: Set(Some("+1-555-0199".into())),
        created_at: NotSet,
    }
    .insert(&db)
    .await;

    assert_eq!(constraint_kind(second), ConstraintKind::Unique);
    Ok(())
}

#[tokio::test]
async fn duplicate_sku_and_category_name_are_rejected() -> anyhow::Result<()> {
    let db = setup_db().await?;
    create_product(&db, "SKU-1", 100).await?;
    let dup_sku = create_product(&db, "SKU-1", 200).await;
    let err = dup_sku.expect_err("duplicate sku");
    let err = err
        .downcast::<sea_orm::DbErr>()
        .map(ecommerce_schema::error::AppError::from)?;
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));

    let category = |name: &str| categories::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
    };
    category("Games").insert(&db).await?;
    assert_eq!(
        constraint_kind(category("Games").insert(&db).await),
        ConstraintKind::Unique
    );
    Ok(())
}

#[tokio::test]
async fn order_item_quantity_must_be_positive() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let customer_id = create_customer(&db, "qty@example.com").await?;
    let product_id = create_product(&db, "QTY-1", 1_000).await?;
    let order_id = create_order(&db, customer_id).await?;

    for quantity in [0, -1] {
        let result = order_item(order_id, product_id, quantity, 1_000).insert(&db).await;
        assert_eq!(constraint_kind(result), ConstraintKind::Check, "quantity {quantity}");
    }

    let item = order_item(order_id, product_id, 1, 1_000).insert(&db).await?;
    assert_eq!(item.quantity, 1);
    Ok(())
}

#[tokio::test]
async fn same_product_cannot_appear_twice_in_an_order() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let customer_id = create_customer(&db, "twice@example.com").await?;
    let product_id = create_product(&db, "TWICE-1", 500).await?;
    let order_id = create_order(&db, customer_id).await?;

    order_item(order_id, product_id, 1, 500).insert(&db).await?;
    let again = order_item(order_id, product_id, 3, 500).insert(&db).await;
    assert_eq!(constraint_kind(again), ConstraintKind::Unique);
    Ok(())
}

#[tokio::test]
async fn review_rating_is_bounded() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let product_id = create_product(&db, "RATE-1", 500).await?;

    for rating in [0, 6] {
        let result = review(product_id, None, rating).insert(&db).await;
        assert_eq!(constraint_kind(result), ConstraintKind::Check, "rating {rating}");
    }
    for rating in [1, 5] {
        let saved = review(product_id, None, rating).insert(&db).await?;
        assert_eq!(saved.rating, rating);
        assert_eq!(saved.customer_id, None);
    }
    Ok(())
}

#[tokio::test]
async fn enum_columns_reject_unknown_values() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let customer_id = create_customer(&db, "enum@example.com").await?;
    let order_id = create_order(&db, customer_id).await?;

    let order = orders::Entity::find_by_id(order_id)
        .one(&db)
        .await?
        .expect("order");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 0);

    let bad_status = exec_raw(
        &db,
        &format!("UPDATE orders SET status = 'lost' WHERE id = {order_id}"),
    )
    .await;
    assert_eq!(constraint_kind(bad_status), ConstraintKind::Check);

    let bad_method = exec_raw(
        &db,
        &format!("INSERT INTO payments (order_id, amount, method) VALUES ({order_id}, 100, 'barter')"),
    )
    .await;
    assert_eq!(constraint_kind(bad_method), ConstraintKind::Check);

    let bad_role = exec_raw(
        &db,
        "INSERT INTO users (username, password_hash, role) VALUES ('mallory', 'x', 'root')",
    )
    .await;
    assert_eq!(constraint_kind(bad_role), ConstraintKind::Check);

    let payment = payments::ActiveModel {
        id: NotSet,
        order_id: Set(order_id),
        amount: Set(100),
        method: Set(PaymentMethod::BankTransfer),
        paid_at: NotSet,
    }
    .insert(&db)
    .await?;
    assert_eq!(payment.method, PaymentMethod::BankTransfer);
    Ok(())
}

#[tokio::test]
async fn usernames_are_unique_and_role_defaults_to_viewer() -> anyhow::Result<()> {
    let db = setup_db().await?;
    exec_raw(
        &db,
        "INSERT INTO users (username, password_hash) VALUES ('ops', '$argon2id$placeholder')",
    )
    .await?;

    let user = users::Entity::find().one(&db).await?.expect("user");
    assert_eq!(user.username, "ops");
    assert_eq!(user.role, UserRole::Viewer);

    let duplicate = users::ActiveModel {
        id: NotSet,
        username: Set("ops".into()),
        password_hash: Set("other".into()),
        role: Set(UserRole::Admin),
        created_at: NotSet,
    }
    .insert(&db)
    .await;
    assert_eq!(constraint_kind(duplicate), ConstraintKind::Unique);
    Ok(())
}

#[tokio::test]
async fn missing_required_columns_are_rejected() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let result = exec_raw(&db, "INSERT INTO customers (name) VALUES ('No Email')").await;
    assert_eq!(constraint_kind(result), ConstraintKind::NotNull);
    Ok(())
}

#[tokio::test]
async fn order_for_unknown_customer_is_rejected() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let result = create_order(&db, 42).await;
    let err = result
        .expect_err("unknown customer")
        .downcast::<sea_orm::DbErr>()
        .map(ecommerce_schema::error::AppError::from)?;
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    Ok(())
}
