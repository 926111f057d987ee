use actix_web::{web, HttpResponse};

use crate::{db_interaction::menu::{get_menu as find_menu, list_menus}, error::ApiError, response, routes::PageQuery, utils::Database};

#[tracing::instrument(
    "Getting list of menus",
    skip(db)
)]
pub async fn get_menus(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (menus, total) = list_menus(&db, pagination).await?;

    Ok(response::ok_page(
        "Menus retrieved successfully",
        menus,
        pagination.page_info("total_menus", total)
    ))
}

#[tracing::instrument(
    "Getting menu",
    skip(db)
)]
pub async fn get_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let menu = find_menu(&db, menu_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Menu not found".to_string()))?;

    Ok(response::ok("Menu retrieved successfully", menu))
}
