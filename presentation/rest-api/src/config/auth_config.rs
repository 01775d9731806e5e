use std::env;

/// Configuration for bearer-token validation.
///
/// Environment variables:
/// - AUTH_JWT_SECRET: shared secret the auth provider signs tokens with
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("AUTH_JWT_SECRET").expect("AUTH_JWT_SECRET must be set");

        Self { jwt_secret }
    }
}
