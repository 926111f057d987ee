use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::{db_interaction::{food::insert_food, menu::menu_exists}, domain::{food_unique_key, non_empty, positive_price, required_text}, error::ApiError, models::{public_id, Food}, response, utils::Database};

use super::{FoodBody, FOOD_NAME_LENGTH};

fn new_food(body: FoodBody) -> Result<Food, String>{
    let name = required_text("name", body.name, FOOD_NAME_LENGTH.0, FOOD_NAME_LENGTH.1)?;
    let price = positive_price("price", body.price.ok_or("price is required")?)?;
    let menu_id = non_empty(body.menu_id).ok_or("menu_id is required")?;

    let now = Utc::now();
    let id = Uuid::new_v4();

    Ok(Food{
        id,
        food_id: public_id(&id),
        unique_food_id: food_unique_key(&menu_id, &name),
        name,
        price,
        food_image: non_empty(body.food_image),
        menu_id,
        created_at: now,
        updated_at: now
    })
}

#[tracing::instrument(
    "Creating food item",
    skip(db)
)]
pub async fn create_food(
    db: web::Data<Database>,
    body: web::Json<FoodBody>
) -> Result<HttpResponse, ApiError> {
    let food = new_food(body.into_inner()).map_err(ApiError::BadRequest)?;

    if !menu_exists(&db, food.menu_id.clone()).await? {
        return Err(ApiError::NotFound("Menu not found".to_string()));
    }

    let food = insert_food(&db, food)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Food item with the same name already exists in this menu"))?;

    Ok(response::created("Food item created successfully", food))
}
