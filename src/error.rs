use std::fmt;

use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::ErrorKind;
use thiserror::Error;

/// The class of integrity rule the database refused to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::Check => "check",
            ConstraintKind::NotNull => "not null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    /// Carries the engine's own message untouched.
    #[error("{kind} constraint violated: {message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    #[error("Amount overflow in order {order_id}")]
    AmountOverflow { order_id: i32 },

    #[error("ORM error: {0}")]
    OrmError(DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            AppError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match constraint_violation(&err) {
            Some((kind, message)) => {
                tracing::debug!(%kind, %message, "constraint violation");
                AppError::Constraint { kind, message }
            }
            None => AppError::OrmError(err),
        }
    }
}

/// Classifies a driver error by the integrity rule it reports, if any.
pub fn constraint_violation(err: &DbErr) -> Option<(ConstraintKind, String)> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };
    let RuntimeErr::SqlxError(sqlx::Error::Database(db_err)) = runtime else {
        return None;
    };

    let message = db_err.message();
    let kind = classify(db_err.kind(), db_err.code().as_deref(), message)?;
    Some((kind, message.to_string()))
}

/// SQLite raises `ON DELETE RESTRICT` as SQLITE_CONSTRAINT_TRIGGER (1811),
/// which sqlx reports as `ErrorKind::Other`.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

fn classify(kind: ErrorKind, code: Option<&str>, message: &str) -> Option<ConstraintKind> {
    match kind {
        ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
        ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
        ErrorKind::CheckViolation => Some(ConstraintKind::Check),
        ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
        _ if code == Some(SQLITE_CONSTRAINT_TRIGGER) || message.starts_with("FOREIGN KEY") => {
            Some(ConstraintKind::ForeignKey)
        }
        _ => None,
    }
}

pub type AppResult<T> = Result<T, AppError>;
