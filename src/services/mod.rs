pub mod auth_service;
pub mod statement_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use statement_service::StatementService;
pub use user_service::UserService;
