pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtKeys};
pub use middleware::AuthUser;
