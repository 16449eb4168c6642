use crate::balance;
use crate::models::{OperationType, Statement};
use crate::repositories::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StatementRepository: Send + Sync {
    async fn create_deposit(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> RepositoryResult<Statement>;

    /// Checks the resulting balance and inserts in one atomic step.
    /// Fails with `InsufficientFunds` when `amount` exceeds the balance.
    async fn create_withdrawal(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> RepositoryResult<Statement>;

    async fn list_for_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Statement>>;

    /// Looks up a statement scoped to its owner. A statement belonging to a
    /// different user is indistinguishable from a missing one.
    async fn find_for_user(&self, id: Uuid, user_id: Uuid)
        -> RepositoryResult<Option<Statement>>;
}

pub struct SqliteStatementRepository {
    pool: SqlitePool,
}

impl SqliteStatementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn new_statement(
        user_id: Uuid,
        operation: OperationType,
        amount: Decimal,
        description: &str,
    ) -> Statement {
        Statement {
            id: Uuid::new_v4(),
            user_id,
            operation,
            amount,
            description: description.to_string(),
            created_at: Utc::now(),
        }
    }
}

const SELECT_FOR_USER: &str = "SELECT id, user_id, type, amount, description, created_at
     FROM statements
     WHERE user_id = ?
     ORDER BY rowid";

const INSERT_STATEMENT: &str =
    "INSERT INTO statements (id, user_id, type, amount, description, created_at)
     VALUES (?, ?, ?, ?, ?, ?)";

#[async_trait]
impl StatementRepository for SqliteStatementRepository {
    async fn create_deposit(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> RepositoryResult<Statement> {
        let statement =
            Self::new_statement(user_id, OperationType::Deposit, amount, description);

        sqlx::query(INSERT_STATEMENT)
            .bind(statement.id.to_string())
            .bind(statement.user_id.to_string())
            .bind(statement.operation.as_str())
            .bind(statement.amount.to_string())
            .bind(&statement.description)
            .bind(statement.created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(statement)
    }

    async fn create_withdrawal(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> RepositoryResult<Statement> {
        // Balance check and insert share one transaction so a concurrent
        // withdrawal cannot overdraw; the losing writer gets a busy error
        // from SQLite instead of committing against a stale balance.
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Statement>(SELECT_FOR_USER)
            .bind(user_id.to_string())
            .fetch_all(&mut *tx)
            .await?;

        if amount > balance::compute(&existing) {
            return Err(RepositoryError::InsufficientFunds);
        }

        let statement =
            Self::new_statement(user_id, OperationType::Withdraw, amount, description);

        sqlx::query(INSERT_STATEMENT)
            .bind(statement.id.to_string())
            .bind(statement.user_id.to_string())
            .bind(statement.operation.as_str())
            .bind(statement.amount.to_string())
            .bind(&statement.description)
            .bind(statement.created_at.to_rfc3339())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(statement)
    }

    async fn list_for_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Statement>> {
        let statements = sqlx::query_as::<_, Statement>(SELECT_FOR_USER)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        Ok(statements)
    }

    async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Statement>> {
        let statement = sqlx::query_as::<_, Statement>(
            "SELECT id, user_id, type, amount, description, created_at
             FROM statements
             WHERE id = ? AND user_id = ?",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(statement)
    }
}
