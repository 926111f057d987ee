use std::rc::Rc;

use actix_web::{dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, http::header::{HeaderValue, AUTHORIZATION}, web, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Instrument;

use crate::{error::ApiError, utils::Database};

use super::{validate_token, Claims, Tokenizer};

// Gate in front of every protected route
pub struct AuthMiddlewareFactory;

impl<S> Transform<S, ServiceRequest> for AuthMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
    S::Future: 'static
{
    type Response = ServiceResponse;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware{ service: Rc::new(service) }))
    }
}


pub struct AuthMiddleware<S>{
    service: Rc<S>
}

impl<S> Service<ServiceRequest> for AuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error> + 'static,
    S::Future : 'static
{
    type Response = S::Response;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    #[tracing::instrument(
        "Authenticating request",
        skip(self, req)
    )]
    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let current_span = tracing::Span::current();

        Box::pin(
            async move {
                let claims = match authenticate(&req).await {
                    Ok(claims) => claims,
                    Err(e) => return Ok(req.error_response(e))
                };
                req.extensions_mut().insert(claims);

                let res = service.call(req).await?;
                Ok(res)
            }
            .instrument(current_span)
        )
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<Claims, ApiError>{
    let token = bearer_token(req.headers().get(AUTHORIZATION))?.to_string();

    let tokenizer = req.app_data::<web::Data<Tokenizer>>()
        .ok_or_else(|| anyhow::anyhow!("Tokenizer is not registered as app data"))?;
    let db = req.app_data::<web::Data<Database>>()
        .ok_or_else(|| anyhow::anyhow!("Database is not registered as app data"))?;

    validate_token(db, tokenizer, &token).await
}

/// Token of an `Authorization: Bearer <token>` header
pub fn bearer_token(header: Option<&HeaderValue>) -> Result<&str, ApiError>{
    let header = header
        .ok_or_else(|| ApiError::Unauthorized("No Authorization header provided".to_string()))?;

    let malformed = || ApiError::Unauthorized("Authorization header must be 'Bearer <token>'".to_string());

    let token = header.to_str()
        .map_err(|_| malformed())?
        .strip_prefix("Bearer ")
        .ok_or_else(malformed)?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(malformed());
    }

    Ok(token)
}
