use actix_web::{web, HttpResponse};

use crate::{db_interaction::food::delete_food as remove_food, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting food item",
    skip(db)
)]
pub async fn delete_food(
    db: web::Data<Database>,
    food_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let food = remove_food(&db, food_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

    Ok(response::ok("Food item deleted successfully", food))
}
