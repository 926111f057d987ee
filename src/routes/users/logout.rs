use actix_web::{web, HttpResponse};

use crate::{auth::AuthenticatedUser, db_interaction::user::store_tokens, error::ApiError, response::ApiResponse, utils::Database};

#[tracing::instrument(
    "Logging out currently logged in user",
    skip_all,
    fields(user_id = %user.user_id())
)]
pub async fn logout(
    db: web::Data<Database>,
    user: AuthenticatedUser
) -> Result<HttpResponse, ApiError> {
    store_tokens(&db, user.user_id().to_string(), None, None).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("User logged out successfully")))
}
