use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth::Tokenizer, db_interaction::user::insert_user, domain::{non_empty, required_text, PhoneNumber, UserEmail}, error::ApiError, models::{public_id, User}, password::hash_password, response, utils::Database};

use super::AuthPayload;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Deserialize, Debug)]
pub struct SignupBody{
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub phone: Option<String>
}

#[derive(Debug)]
pub struct NewUser{
    pub first_name: String,
    pub last_name: String,
    pub email: UserEmail,
    pub password: SecretString,
    pub phone: Option<PhoneNumber>
}

impl TryFrom<SignupBody> for NewUser {
    type Error = String;

    fn try_from(body: SignupBody) -> Result<Self, Self::Error> {
        let first_name = required_text("first_name", body.first_name, 1, 100)?;
        let last_name = required_text("last_name", body.last_name, 1, 100)?;

        let email = non_empty(body.email).ok_or("email is required")?;
        let email = UserEmail::parse(email)?;

        let password = body.password.ok_or("password is required")?;
        if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(format!("password must be at least {} characters", MIN_PASSWORD_LENGTH));
        }

        let phone = non_empty(body.phone)
            .map(PhoneNumber::parse)
            .transpose()?;

        Ok(Self{ first_name, last_name, email, password, phone })
    }
}

#[tracing::instrument(
    "User signup started",
    skip(db, tokenizer, body)
)]
pub async fn signup(
    db: web::Data<Database>,
    tokenizer: web::Data<Tokenizer>,
    body: web::Json<SignupBody>
) -> Result<HttpResponse, ApiError> {
    let new_user = NewUser::try_from(body.into_inner())
        .map_err(ApiError::BadRequest)?;

    let password_hash = hash_password(new_user.password).await?;

    let now = Utc::now();
    let id = Uuid::new_v4();
    let mut user = User{
        id,
        user_id: public_id(&id),
        first_name: new_user.first_name,
        last_name: new_user.last_name,
        email: new_user.email.0,
        password: password_hash.expose_secret().to_string(),
        phone: new_user.phone.map(|p| p.inner()),
        token: None,
        refresh_token: None,
        created_at: now,
        updated_at: now
    };

    let tokens = tokenizer.issue_tokens(&user)
        .map_err(|e| ApiError::UnexpectedError(anyhow::anyhow!(e).context("Failed to sign tokens")))?;
    user.token = Some(tokens.token.clone());
    user.refresh_token = Some(tokens.refresh_token.clone());

    let user = insert_user(&db, user)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Email already exists"))?;

    Ok(response::created(
        "User created successfully",
        AuthPayload{ user: user.into(), tokens }
    ))
}
