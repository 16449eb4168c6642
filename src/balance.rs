//! Balance aggregation over a user's statement collection.
//!
//! Pure functions: no persistence, no side effects. Amounts are
//! `rust_decimal::Decimal`, so sums carry no floating point drift.

use crate::models::{OperationType, Statement};
use rust_decimal::Decimal;
use serde::Serialize;

/// Balance plus the full statement list, insertion order preserved.
#[derive(Debug, Serialize)]
pub struct BalanceSheet {
    pub statement: Vec<Statement>,
    pub balance: Decimal,
}

/// Net balance of a statement collection: Σ deposits − Σ withdrawals.
///
/// An empty collection yields zero.
pub fn compute(statements: &[Statement]) -> Decimal {
    statements
        .iter()
        .fold(Decimal::ZERO, |acc, statement| match statement.operation {
            OperationType::Deposit => acc + statement.amount,
            OperationType::Withdraw => acc - statement.amount,
        })
}

/// Itemized report: the statements themselves plus their net balance.
pub fn sheet(statements: Vec<Statement>) -> BalanceSheet {
    let balance = compute(&statements);
    BalanceSheet {
        statement: statements,
        balance,
    }
}
