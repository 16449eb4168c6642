pub mod auth;

pub use auth::JwtConfig;
