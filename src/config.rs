use std::env;

use sea_orm::DbBackend;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub sql_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let sql_logging = env::var("DB_LOG_SQL")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            sql_logging,
        })
    }
}

/// Settings for rendering the schema script without a live connection.
#[derive(Debug, Clone)]
pub struct DdlConfig {
    pub backend: DbBackend,
    pub database_name: String,
    pub with_seed: bool,
}

impl DdlConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let backend = match lookup("DDL_BACKEND") {
            Some(value) => parse_backend(&value)?,
            None => DbBackend::MySql,
        };
        let database_name = lookup("DATABASE_NAME").unwrap_or_else(|| "ecommerce".to_string());
        let with_seed = lookup("DDL_WITH_SEED")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);
        Ok(Self {
            backend,
            database_name,
            with_seed,
        })
    }
}

pub fn parse_backend(value: &str) -> AppResult<DbBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "mysql" | "mariadb" => Ok(DbBackend::MySql),
        "postgres" | "postgresql" | "pg" => Ok(DbBackend::Postgres),
        "sqlite" => Ok(DbBackend::Sqlite),
        other => Err(AppError::Config(format!("unknown database backend `{other}`"))),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
