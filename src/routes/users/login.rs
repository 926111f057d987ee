use actix_web::{web, HttpResponse};
use secrecy::SecretString;
use serde::Deserialize;

use crate::{auth::Tokenizer, db_interaction::user::{get_user_by_email, store_tokens}, domain::non_empty, error::ApiError, password::verify_password, response, utils::Database};

use super::AuthPayload;

#[derive(Deserialize, Debug)]
pub struct LoginBody{
    pub email: Option<String>,
    pub password: Option<SecretString>
}

fn invalid_credentials() -> ApiError{
    ApiError::Unauthorized("Email or password is incorrect".to_string())
}

/// Issues a fresh token pair, replacing the stored one so earlier tokens stop working
#[tracing::instrument(
    "Logging in user",
    skip(db, tokenizer, body)
)]
pub async fn login(
    db: web::Data<Database>,
    tokenizer: web::Data<Tokenizer>,
    body: web::Json<LoginBody>
) -> Result<HttpResponse, ApiError>{
    let body = body.into_inner();
    let email = non_empty(body.email)
        .ok_or_else(|| ApiError::BadRequest("email is required".to_string()))?;
    let password = body.password
        .ok_or_else(|| ApiError::BadRequest("password is required".to_string()))?;

    let user = match get_user_by_email(&db, email).await? {
        Some(user) => user,
        None => return Err(invalid_credentials())
    };

    if !verify_password(password, user.password.clone()).await? {
        tracing::info!("Passwords did not match");
        return Err(invalid_credentials());
    }

    let tokens = tokenizer.issue_tokens(&user)
        .map_err(|e| ApiError::UnexpectedError(anyhow::anyhow!(e).context("Failed to sign tokens")))?;

    if !store_tokens(&db, user.user_id.clone(), Some(tokens.token.clone()), Some(tokens.refresh_token.clone())).await? {
        return Err(invalid_credentials());
    }

    Ok(response::ok(
        "User logged-in successfully",
        AuthPayload{ user: user.into(), tokens }
    ))
}
