pub mod extractors;
pub mod jwt;
pub mod middleware;

pub use extractors::AuthenticatedUser;
pub use jwt::{Claims, TokenPair, TokenRejection, Tokenizer};
pub use middleware::AuthMiddlewareFactory;

use crate::{db_interaction::user::get_stored_token, error::ApiError, utils::Database};

/// Decodes `token` and confirms it is still the token stored for its user.
/// A token superseded by a later login, or cleared by logout, is rejected
/// even before it expires.
#[tracing::instrument(
    "Validating access token",
    skip_all
)]
pub async fn validate_token(
    db: &Database,
    tokenizer: &Tokenizer,
    token: &str
) -> Result<Claims, ApiError>{
    let claims = tokenizer.decode_key(token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    match get_stored_token(db, claims.sub.clone()).await? {
        Some(Some(stored)) if stored == token => Ok(claims),
        Some(_) => Err(ApiError::Unauthorized("token has been revoked".to_string())),
        None => Err(ApiError::Unauthorized(TokenRejection::Invalid.to_string()))
    }
}
