use crate::auth::jwt::JwtKeys;
use chrono::Duration;
use std::env;

const DEV_SECRET: &str = "finapi-dev-secret";
const DEFAULT_EXPIRES_IN_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in: Duration,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string());

        let expires_in_secs = env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_EXPIRES_IN_SECS);

        Self {
            secret,
            expires_in: Duration::seconds(expires_in_secs),
        }
    }

    pub fn keys(&self) -> JwtKeys {
        JwtKeys::new(&self.secret, self.expires_in)
    }
}

pub fn validate_production_config() {
    if env::var("ENVIRONMENT").unwrap_or_default() != "production" {
        return;
    }

    let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");

    if secret.len() < 32 {
        panic!("FATAL: JWT_SECRET must be at least 32 bytes in production");
    }

    let lowered = secret.to_ascii_lowercase();
    if lowered.contains("example") || lowered.contains("changeme") || lowered.contains("dev") {
        panic!("FATAL: JWT_SECRET looks like a placeholder value");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_outside_production() {
        let config = JwtConfig {
            secret: DEV_SECRET.to_string(),
            expires_in: Duration::seconds(DEFAULT_EXPIRES_IN_SECS),
        };
        assert_eq!(config.expires_in, Duration::days(1));
    }
}
