use actix_web::{FromRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::error::ApiError;

use super::jwt::Claims;

// Identity attached by `AuthMiddlewareFactory`, only available inside the protected scope
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str{
        &self.0.sub
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        match claims {
            Some(claims) => ready(Ok(AuthenticatedUser(claims))),
            None => ready(Err(ApiError::Unauthorized("Authentication required".to_string())))
        }
    }
}
