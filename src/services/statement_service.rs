use crate::balance::{self, BalanceSheet};
use crate::models::Statement;
use crate::repositories::statement_repository::StatementRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StatementServiceError {
    #[error("User not found")]
    UserNotFound,
    #[error("Statement not found")]
    StatementNotFound,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Amount must not be negative")]
    NegativeAmount,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct StatementService {
    user_repository: Arc<dyn UserRepository>,
    statement_repository: Arc<dyn StatementRepository>,
}

impl StatementService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        statement_repository: Arc<dyn StatementRepository>,
    ) -> Self {
        Self {
            user_repository,
            statement_repository,
        }
    }

    pub async fn deposit(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> Result<Statement, StatementServiceError> {
        self.ensure_user_exists(user_id).await?;
        validate_amount(amount)?;

        let statement = self
            .statement_repository
            .create_deposit(user_id, amount, description)
            .await?;

        tracing::info!(user_id = %user_id, statement_id = %statement.id, "deposit recorded");
        Ok(statement)
    }

    /// Withdrawing exactly the current balance is allowed; one cent more is
    /// not. The check-and-insert runs atomically in the repository.
    pub async fn withdraw(
        &self,
        user_id: Uuid,
        amount: Decimal,
        description: &str,
    ) -> Result<Statement, StatementServiceError> {
        self.ensure_user_exists(user_id).await?;
        validate_amount(amount)?;

        match self
            .statement_repository
            .create_withdrawal(user_id, amount, description)
            .await
        {
            Ok(statement) => {
                tracing::info!(user_id = %user_id, statement_id = %statement.id, "withdrawal recorded");
                Ok(statement)
            }
            Err(RepositoryError::InsufficientFunds) => {
                tracing::info!(user_id = %user_id, "withdrawal rejected, insufficient funds");
                Err(StatementServiceError::InsufficientFunds)
            }
            Err(e) => Err(StatementServiceError::RepositoryError(e)),
        }
    }

    pub async fn balance(&self, user_id: Uuid) -> Result<BalanceSheet, StatementServiceError> {
        self.ensure_user_exists(user_id).await?;

        let statements = self.statement_repository.list_for_user(user_id).await?;
        Ok(balance::sheet(statements))
    }

    pub async fn statement(
        &self,
        user_id: Uuid,
        statement_id: Uuid,
    ) -> Result<Statement, StatementServiceError> {
        self.ensure_user_exists(user_id).await?;

        self.statement_repository
            .find_for_user(statement_id, user_id)
            .await?
            .ok_or(StatementServiceError::StatementNotFound)
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> Result<(), StatementServiceError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(StatementServiceError::UserNotFound)?;
        Ok(())
    }
}

fn validate_amount(amount: Decimal) -> Result<(), StatementServiceError> {
    if amount < Decimal::ZERO {
        return Err(StatementServiceError::NegativeAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationType, User};
    use crate::repositories::statement_repository::MockStatementRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn existing_user(id: Uuid) -> User {
        User {
            id,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user_repo_with(id: Uuid) -> MockUserRepository {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_id().with(eq(id)).returning(move |id| {
            Box::pin(async move { Ok(Some(existing_user(id))) })
        });
        mock
    }

    #[tokio::test]
    async fn test_deposit_unknown_user() {
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async move { Ok(None) }));

        let service = StatementService::new(
            Arc::new(user_repo),
            Arc::new(MockStatementRepository::new()),
        );

        let result = service
            .deposit(Uuid::new_v4(), Decimal::from(100), "Deposit")
            .await;
        assert!(matches!(result, Err(StatementServiceError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_deposit_negative_amount() {
        let user_id = Uuid::new_v4();
        let service = StatementService::new(
            Arc::new(user_repo_with(user_id)),
            Arc::new(MockStatementRepository::new()),
        );

        let result = service.deposit(user_id, Decimal::from(-1), "Deposit").await;
        assert!(matches!(result, Err(StatementServiceError::NegativeAmount)));
    }

    #[tokio::test]
    async fn test_withdraw_maps_insufficient_funds() {
        let user_id = Uuid::new_v4();

        let mut statement_repo = MockStatementRepository::new();
        statement_repo
            .expect_create_withdrawal()
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async move { Err(RepositoryError::InsufficientFunds) })
            });

        let service =
            StatementService::new(Arc::new(user_repo_with(user_id)), Arc::new(statement_repo));

        let result = service.withdraw(user_id, Decimal::from(500), "Withdraw").await;
        assert!(matches!(
            result,
            Err(StatementServiceError::InsufficientFunds)
        ));
    }

    #[tokio::test]
    async fn test_statement_not_found_for_other_owner() {
        let user_id = Uuid::new_v4();
        let statement_id = Uuid::new_v4();

        let mut statement_repo = MockStatementRepository::new();
        statement_repo
            .expect_find_for_user()
            .with(eq(statement_id), eq(user_id))
            .times(1)
            .returning(|_, _| Box::pin(async move { Ok(None) }));

        let service =
            StatementService::new(Arc::new(user_repo_with(user_id)), Arc::new(statement_repo));

        let result = service.statement(user_id, statement_id).await;
        assert!(matches!(
            result,
            Err(StatementServiceError::StatementNotFound)
        ));
    }

    #[tokio::test]
    async fn test_balance_aggregates_statements() {
        let user_id = Uuid::new_v4();

        let mut statement_repo = MockStatementRepository::new();
        statement_repo
            .expect_list_for_user()
            .with(eq(user_id))
            .times(1)
            .returning(move |user_id| {
                Box::pin(async move {
                    Ok(vec![
                        Statement {
                            id: Uuid::new_v4(),
                            user_id,
                            operation: OperationType::Deposit,
                            amount: Decimal::from(100),
                            description: "Deposit".to_string(),
                            created_at: Utc::now(),
                        },
                        Statement {
                            id: Uuid::new_v4(),
                            user_id,
                            operation: OperationType::Withdraw,
                            amount: Decimal::from(25),
                            description: "Withdraw".to_string(),
                            created_at: Utc::now(),
                        },
                    ])
                })
            });

        let service =
            StatementService::new(Arc::new(user_repo_with(user_id)), Arc::new(statement_repo));

        let sheet = service.balance(user_id).await.expect("balance");
        assert_eq!(sheet.balance, Decimal::from(75));
        assert_eq!(sheet.statement.len(), 2);
    }
}
