use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{configuration::JWTSettings, models::User};

#[derive(Clone)]
pub struct Tokenizer{
    pub secret: SecretString,
    pub access_expiry_hours: u64,
    pub refresh_expiry_hours: u64
}

// Access token plus the longer lived refresh token
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenPair{
    pub token: String,
    pub refresh_token: String
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims{
    // public user_id
    pub sub: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub exp: usize
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenRejection{
    #[error("token is expired")]
    Expired,
    #[error("the token is invalid")]
    Invalid
}

impl Tokenizer {
    pub fn new(settings: &JWTSettings) -> Self {
        Self{
            secret: SecretString::from(settings.secret.expose_secret().to_string()),
            access_expiry_hours: settings.access_expiry_hours,
            refresh_expiry_hours: settings.refresh_expiry_hours
        }
    }

    pub fn generate_key(&self, user: &User, expiry_hours: u64) -> Result<String, jsonwebtoken::errors::Error>{
        let expiry = Utc::now() + Duration::hours(expiry_hours as i64);

        let claims = Claims{
            sub: user.user_id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            exp: expiry.timestamp() as usize
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
        )
    }

    pub fn issue_tokens(&self, user: &User) -> Result<TokenPair, jsonwebtoken::errors::Error>{
        Ok(TokenPair{
            token: self.generate_key(user, self.access_expiry_hours)?,
            refresh_token: self.generate_key(user, self.refresh_expiry_hours)?
        })
    }

    // Checks signature and expiry only, see `auth::validate_token` for the stored token check
    pub fn decode_key(&self, token: &str) -> Result<Claims, TokenRejection>{
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation
        ) {
            Ok(decoded_data) => Ok(decoded_data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenRejection::Expired),
                _ => Err(TokenRejection::Invalid)
            }
        }
    }
}
