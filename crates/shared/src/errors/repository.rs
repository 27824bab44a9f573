use sea_query::error::Error as StatementError;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to build statement: {0}")]
    Statement(#[from] StatementError),

    #[error("failed to {operation}: {source}")]
    Query {
        operation: String,
        #[source]
        source: SqlxError,
    },

    #[error("no stock record found with stockid={0}")]
    NotFound(i64),
}

impl RepositoryError {
    pub fn query(operation: impl Into<String>, source: SqlxError) -> Self {
        Self::Query {
            operation: operation.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
