use actix_web::{web, HttpResponse};

use crate::{db_interaction::{food::{get_food as find_food, list_foods}, menu::menu_exists}, error::ApiError, response, routes::PageQuery, utils::Database};

#[tracing::instrument(
    "Getting list of foods",
    skip(db)
)]
pub async fn get_foods(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (foods, total) = list_foods(&db, None, pagination).await?;

    Ok(response::ok_page(
        "Food items retrieved successfully",
        foods,
        pagination.page_info("total_foods", total)
    ))
}

#[tracing::instrument(
    "Getting foods of a menu",
    skip(db)
)]
pub async fn get_foods_by_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let menu_id = menu_id.into_inner();
    if !menu_exists(&db, menu_id.clone()).await? {
        return Err(ApiError::NotFound("Menu not found".to_string()));
    }

    let pagination = query.pagination();
    let (foods, total) = list_foods(&db, Some(menu_id), pagination).await?;

    Ok(response::ok_page(
        "Foods retrieved successfully",
        foods,
        pagination.page_info("total_foods", total)
    ))
}

#[tracing::instrument(
    "Getting food item",
    skip(db)
)]
pub async fn get_food(
    db: web::Data<Database>,
    food_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let food = find_food(&db, food_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

    Ok(response::ok("Food item retrieved successfully", food))
}
