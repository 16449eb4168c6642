use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use std::str::FromStr;
use uuid::Uuid;

/// Closed set of ledger operations, stored as `deposit` / `withdraw` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Deposit,
    Withdraw,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Deposit => "deposit",
            OperationType::Withdraw => "withdraw",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown operation type: {0}")]
pub struct ParseOperationTypeError(String);

impl FromStr for OperationType {
    type Err = ParseOperationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(OperationType::Deposit),
            "withdraw" => Ok(OperationType::Withdraw),
            other => Err(ParseOperationTypeError(other.to_string())),
        }
    }
}

/// An immutable ledger entry representing one deposit or withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub operation: OperationType,
    pub amount: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// Amounts are stored as decimal TEXT so SQLite never rounds them.
impl<'r> FromRow<'r, SqliteRow> for Statement {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let operation: String = row.try_get("type")?;
        let amount: String = row.try_get("amount")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Statement {
            id: Uuid::parse_str(&id).map_err(|e| sqlx::Error::ColumnDecode {
                index: "id".into(),
                source: Box::new(e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| sqlx::Error::ColumnDecode {
                index: "user_id".into(),
                source: Box::new(e),
            })?,
            operation: operation
                .parse()
                .map_err(|e: ParseOperationTypeError| sqlx::Error::ColumnDecode {
                    index: "type".into(),
                    source: Box::new(e),
                })?,
            amount: Decimal::from_str(&amount).map_err(|e| sqlx::Error::ColumnDecode {
                index: "amount".into(),
                source: Box::new(e),
            })?,
            description: row.try_get("description")?,
            created_at: super::user::parse_timestamp(&created_at, "created_at")?,
        })
    }
}
