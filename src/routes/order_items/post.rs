use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::order_item::create_order_item as insert_order_item, domain::{check_quantities, non_empty}, error::ApiError, response, utils::Database};

#[derive(Deserialize, Debug)]
pub struct CreateOrderItemBody{
    pub order_id: Option<String>,
    pub table_id: Option<String>,
    // food id -> quantity
    pub items: Option<BTreeMap<String, i32>>
}

#[tracing::instrument(
    "Creating order item",
    skip(db)
)]
pub async fn create_order_item(
    db: web::Data<Database>,
    body: web::Json<CreateOrderItemBody>
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let order_id = non_empty(body.order_id)
        .ok_or_else(|| ApiError::BadRequest("order_id is required".to_string()))?;
    let table_id = non_empty(body.table_id)
        .ok_or_else(|| ApiError::BadRequest("table_id is required".to_string()))?;
    let items = body.items
        .ok_or_else(|| ApiError::BadRequest("items is required".to_string()))?;
    check_quantities(&items).map_err(ApiError::BadRequest)?;

    let item = insert_order_item(&db, order_id, table_id, items).await??;

    Ok(response::created("Order item created successfully", item))
}
