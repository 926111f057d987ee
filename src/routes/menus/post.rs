use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::{db_interaction::menu::insert_menu, domain::{check_validity_window, menu_unique_key, required_text}, error::ApiError, models::{public_id, Menu}, response, utils::Database};

use super::{MenuBody, MENU_CATEGORY_LENGTH, MENU_NAME_LENGTH};

fn new_menu(body: MenuBody) -> Result<Menu, String>{
    let name = required_text("name", body.name, MENU_NAME_LENGTH.0, MENU_NAME_LENGTH.1)?;
    let category = required_text("category", body.category, MENU_CATEGORY_LENGTH.0, MENU_CATEGORY_LENGTH.1)?;
    check_validity_window(body.start_date, body.end_date)?;

    let now = Utc::now();
    let id = Uuid::new_v4();

    Ok(Menu{
        id,
        menu_id: public_id(&id),
        unique_key: menu_unique_key(&name),
        name,
        category,
        start_date: body.start_date,
        end_date: body.end_date,
        created_at: now,
        updated_at: now
    })
}

#[tracing::instrument(
    "Creating menu",
    skip(db)
)]
pub async fn create_menu(
    db: web::Data<Database>,
    body: web::Json<MenuBody>
) -> Result<HttpResponse, ApiError> {
    let menu = new_menu(body.into_inner()).map_err(ApiError::BadRequest)?;

    let menu = insert_menu(&db, menu)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Menu with this name already exists"))?;

    Ok(response::created("Menu created successfully", menu))
}
