pub mod statement;
pub mod user;

pub use statement::{OperationType, Statement};
pub use user::User;
