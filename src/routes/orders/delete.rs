use actix_web::{web, HttpResponse};

use crate::{db_interaction::order::delete_order as remove_order, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting order",
    skip(db)
)]
pub async fn delete_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let order = remove_order(&db, order_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    Ok(response::ok("Order deleted successfully", order))
}
