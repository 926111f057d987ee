use actix_web::{web, HttpResponse};

use crate::{db_interaction::user::{get_user as find_user, list_users}, error::ApiError, models::UserProfile, response, routes::PageQuery, utils::Database};

#[tracing::instrument(
    "Getting list of users",
    skip(db)
)]
pub async fn get_users(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (users, total) = list_users(&db, pagination).await?;

    let users: Vec<UserProfile> = users.into_iter().map(UserProfile::from).collect();

    Ok(response::ok_page(
        "Users retrieved successfully",
        users,
        pagination.page_info("total_users", total)
    ))
}

#[tracing::instrument(
    "Getting user",
    skip(db)
)]
pub async fn get_user(
    db: web::Data<Database>,
    user_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let user = find_user(&db, user_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(response::ok("User fetched successfully", UserProfile::from(user)))
}
