use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::order_item::update_order_item_quantities, domain::check_quantities, error::ApiError, response, utils::Database};

#[derive(Deserialize, Debug)]
pub struct UpdateOrderItemBody{
    // food id -> new quantity
    pub items: Option<BTreeMap<String, i32>>
}

#[tracing::instrument(
    "Updating order item",
    skip(db)
)]
pub async fn update_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>,
    body: web::Json<UpdateOrderItemBody>
) -> Result<HttpResponse, ApiError> {
    let items = body.into_inner().items
        .ok_or_else(|| ApiError::BadRequest("items is required".to_string()))?;
    check_quantities(&items).map_err(ApiError::BadRequest)?;

    let item = update_order_item_quantities(&db, order_item_id.into_inner(), items).await??;

    Ok(response::ok("Order item updated successfully", item))
}
