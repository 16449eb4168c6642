pub mod statement_repository;
pub mod user_repository;

pub use statement_repository::{SqliteStatementRepository, StatementRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
    #[error("Insufficient funds")]
    InsufficientFunds,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
