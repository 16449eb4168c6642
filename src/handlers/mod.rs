pub mod profile_handlers;
pub mod session_handlers;
pub mod statement_handlers;
pub mod user_handlers;

pub use profile_handlers::show_profile;
pub use session_handlers::create_session;
pub use statement_handlers::{create_deposit, create_withdrawal, show_balance, show_statement};
pub use user_handlers::create_user;
