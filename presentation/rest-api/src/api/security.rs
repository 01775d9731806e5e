use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
}

fn extract_uid_from_token(token: &str, secret: &str) -> Result<String, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(token_data.claims.sub)
}

/// Bearer token authentication carrying the storefront account id in the
/// subject claim. Token issuance lives with the external auth provider;
/// this layer only validates and extracts.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub String);

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let config = AuthConfig::from_env();

    match extract_uid_from_token(&bearer.token, &config.jwt_secret) {
        Ok(uid) => Some(uid),
        Err(e) => {
            tracing::warn!("Authentication failed: {e}");
            None
        }
    }
}
