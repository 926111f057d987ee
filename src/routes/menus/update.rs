use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::{db_interaction::menu::{get_menu, update_menu as apply_menu_changes}, domain::{bounded_text, check_validity_window, menu_unique_key, non_empty}, error::ApiError, models::{Menu, MenuChangeset}, response, routes::no_fields_to_update, utils::Database};

use super::{MenuBody, MENU_CATEGORY_LENGTH, MENU_NAME_LENGTH};

/// Changes for the supplied, non blank fields of `body`. `None` when nothing was supplied.
fn menu_changes(current: &Menu, body: MenuBody) -> Result<Option<MenuChangeset>, String>{
    let name = non_empty(body.name)
        .map(|name| bounded_text("name", name, MENU_NAME_LENGTH.0, MENU_NAME_LENGTH.1))
        .transpose()?;
    let category = non_empty(body.category)
        .map(|category| bounded_text("category", category, MENU_CATEGORY_LENGTH.0, MENU_CATEGORY_LENGTH.1))
        .transpose()?;

    if name.is_none() && category.is_none() && body.start_date.is_none() && body.end_date.is_none() {
        return Ok(None);
    }

    check_validity_window(
        body.start_date.or(current.start_date),
        body.end_date.or(current.end_date)
    )?;

    Ok(Some(MenuChangeset{
        unique_key: name.as_deref().map(menu_unique_key),
        name,
        category,
        start_date: body.start_date,
        end_date: body.end_date,
        updated_at: Some(Utc::now())
    }))
}

#[tracing::instrument(
    "Updating menu",
    skip(db)
)]
pub async fn update_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>,
    body: web::Json<MenuBody>
) -> Result<HttpResponse, ApiError> {
    let menu_id = menu_id.into_inner();
    let current = get_menu(&db, menu_id.clone())
        .await?
        .ok_or_else(|| ApiError::NotFound("Menu not found".to_string()))?;

    let changes = menu_changes(&current, body.into_inner())
        .map_err(ApiError::BadRequest)?
        .ok_or_else(no_fields_to_update)?;

    let menu = apply_menu_changes(&db, menu_id, changes)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Menu with this name already exists"))?
        .ok_or_else(|| ApiError::NotFound("Menu not found".to_string()))?;

    Ok(response::ok("Menu updated successfully", menu))
}
