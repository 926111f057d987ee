use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::{db_interaction::{food::{get_food, update_food as apply_food_changes}, menu::menu_exists}, domain::{bounded_text, food_unique_key, non_empty, positive_price}, error::ApiError, models::{Food, FoodChangeset}, response, routes::no_fields_to_update, utils::Database};

use super::{FoodBody, FOOD_NAME_LENGTH};

/// Changes for the supplied fields. The unique key follows a new name or menu.
fn food_changes(current: &Food, body: FoodBody) -> Result<Option<FoodChangeset>, String>{
    let name = non_empty(body.name)
        .map(|name| bounded_text("name", name, FOOD_NAME_LENGTH.0, FOOD_NAME_LENGTH.1))
        .transpose()?;
    let price = body.price
        .map(|price| positive_price("price", price))
        .transpose()?;
    let food_image = non_empty(body.food_image);
    let menu_id = non_empty(body.menu_id);

    if name.is_none() && price.is_none() && food_image.is_none() && menu_id.is_none() {
        return Ok(None);
    }

    let unique_food_id = if name.is_some() || menu_id.is_some() {
        Some(food_unique_key(
            menu_id.as_deref().unwrap_or(&current.menu_id),
            name.as_deref().unwrap_or(&current.name)
        ))
    } else {
        None
    };

    Ok(Some(FoodChangeset{
        name,
        price,
        food_image,
        menu_id,
        unique_food_id,
        updated_at: Some(Utc::now())
    }))
}

#[tracing::instrument(
    "Updating food item",
    skip(db)
)]
pub async fn update_food(
    db: web::Data<Database>,
    food_id: web::Path<String>,
    body: web::Json<FoodBody>
) -> Result<HttpResponse, ApiError> {
    let food_id = food_id.into_inner();
    let current = get_food(&db, food_id.clone())
        .await?
        .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

    let changes = food_changes(&current, body.into_inner())
        .map_err(ApiError::BadRequest)?
        .ok_or_else(no_fields_to_update)?;

    if let Some(menu_id) = &changes.menu_id {
        if !menu_exists(&db, menu_id.clone()).await? {
            return Err(ApiError::NotFound("Menu not found".to_string()));
        }
    }

    let food = apply_food_changes(&db, food_id, changes)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Another food item with the same name exists in this menu"))?
        .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

    Ok(response::ok("Food item updated successfully", food))
}
