//! Renders the schema as a plain SQL script for a given backend.
//!
//! The statements come from the same builders the migrations run, so the
//! printed script and a migrated database never drift apart.

use sea_orm::{
    DbBackend, Statement,
    sea_query::{IndexCreateStatement, TableCreateStatement},
};

use crate::{
    migration::{m20240101_000001_create_tables, m20240101_000002_create_indexes},
    seed,
};

pub fn table_statements() -> Vec<TableCreateStatement> {
    m20240101_000001_create_tables::create_statements()
}

pub fn index_statements() -> Vec<IndexCreateStatement> {
    m20240101_000002_create_indexes::create_statements()
}

/// Database creation and encoding lines that precede the tables.
pub fn database_declaration(backend: DbBackend, database_name: &str) -> Vec<String> {
    match backend {
        DbBackend::MySql => vec![
            format!(
                "CREATE DATABASE IF NOT EXISTS `{database_name}` \
                 CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci"
            ),
            format!("USE `{database_name}`"),
        ],
        DbBackend::Postgres => vec![format!(
            "CREATE DATABASE \"{database_name}\" ENCODING 'UTF8'"
        )],
        DbBackend::Sqlite => vec![
            "PRAGMA encoding = 'UTF-8'".to_string(),
            "PRAGMA foreign_keys = ON".to_string(),
        ],
    }
}

/// Every statement of the script, in execution order, without terminators.
pub fn script_statements(backend: DbBackend, database_name: &str, with_seed: bool) -> Vec<String> {
    let mut lines = database_declaration(backend, database_name);
    lines.extend(table_statements().iter().map(|t| render(backend.build(t))));
    lines.extend(index_statements().iter().map(|i| render(backend.build(i))));
    if with_seed {
        lines.extend(seed::seed_statements(backend).into_iter().map(render));
    }
    lines
}

pub fn render_script(backend: DbBackend, database_name: &str, with_seed: bool) -> String {
    let mut script = String::new();
    for statement in script_statements(backend, database_name, with_seed) {
        script.push_str(&statement);
        script.push_str(";\n");
    }
    script
}

fn render(statement: Statement) -> String {
    statement.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_script_declares_database_and_charset() {
        let script = render_script(DbBackend::MySql, "ecommerce", false);
        assert!(script.starts_with(
            "CREATE DATABASE IF NOT EXISTS `ecommerce` CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;\nUSE `ecommerce`;\n"
        ));
    }

    #[test]
    fn script_has_every_table_and_index() {
        let statements = script_statements(DbBackend::Sqlite, "ecommerce", false);
        // two pragmas, ten tables, three indexes
        assert_eq!(statements.len(), 2 + 10 + 3);

        let script = statements.join("\n");
        for table in [
            "customers",
            "addresses",
            "categories",
            "products",
            "product_categories",
            "orders",
            "order_items",
            "payments",
            "reviews",
            "users",
        ] {
            assert!(
                script.contains(&format!("CREATE TABLE IF NOT EXISTS \"{table}\"")),
                "missing table {table}"
            );
        }
        for index in [
            "idx_products_price",
            "idx_orders_customer_id",
            "idx_order_items_product_id",
        ] {
            assert!(script.contains(index), "missing index {index}");
        }
    }

    #[test]
    fn referential_actions_are_declared() {
        let script = render_script(DbBackend::Postgres, "ecommerce", false);
        assert!(script.contains("ON DELETE RESTRICT"));
        assert!(script.contains("ON DELETE SET NULL"));
        assert!(script.contains("ON DELETE CASCADE ON UPDATE CASCADE"));
    }

    #[test]
    fn enum_domains_are_checked() {
        let script = render_script(DbBackend::MySql, "ecommerce", false);
        assert!(script.contains("'pending', 'paid', 'shipped', 'cancelled', 'refunded'"));
        assert!(script.contains("'credit_card', 'paypal', 'bank_transfer', 'cash_on_delivery'"));
        assert!(script.contains("'admin', 'editor', 'viewer'"));
    }

    #[test]
    fn seed_is_appended_on_request() {
        let without = script_statements(DbBackend::MySql, "ecommerce", false);
        let with = script_statements(DbBackend::MySql, "ecommerce", true);
        assert!(with.len() > without.len());

        let tail = with[without.len()..].join("\n");
        assert!(tail.contains("INSERT INTO `customers`"));
        assert!(tail.contains("alice@example.com"));
        assert!(tail.contains("UPDATE `orders`"));
        assert!(tail.contains("SUM("));
    }
}
