//! AuthGate: resolves the `x-auth-token` header to a persisted user.
//!
//! Tokens are HS256 JWTs signed with `JWT_SECRET` carrying the user id in an
//! `id` claim. They do not expire. Issuing them is outside this service.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const AUTH_HEADER: &str = "x-auth-token";

const NO_TOKEN: &str = "No token, authorization denied";
const INVALID_TOKEN: &str = "Token is not valid";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
}

/// The authenticated caller. Extracting it rejects the request with 401
/// before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized(NO_TOKEN.to_string()))?;

        let claims = verify_token(token, &state.jwt_secret)?;

        let user = state
            .users
            .find_by_id(claims.id)
            .await
            .map_err(|e| {
                tracing::warn!("User lookup failed during authentication: {e}");
                AppError::Unauthorized(INVALID_TOKEN.to_string())
            })?
            .ok_or_else(|| AppError::Unauthorized(INVALID_TOKEN.to_string()))?;

        Ok(AuthUser { user })
    }
}

fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("Rejected token: {e}");
        AppError::Unauthorized(INVALID_TOKEN.to_string())
    })
}

/// Signs a token the way the credential service does.
#[cfg(test)]
pub fn sign_token(user_id: Uuid, secret: &str) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    encode(
        &Header::new(Algorithm::HS256),
        &Claims { id: user_id },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
