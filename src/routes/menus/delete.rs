use actix_web::{web, HttpResponse};

use crate::{db_interaction::menu::delete_menu as remove_menu, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting menu",
    skip(db)
)]
pub async fn delete_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let menu = remove_menu(&db, menu_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Menu not found".to_string()))?;

    Ok(response::ok("Menu deleted successfully", menu))
}
