use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{db_interaction::order::{get_order, table_has_other_open_order, update_order as apply_order_changes}, domain::{non_empty, OrderStatus}, error::ApiError, models::OrderChangeset, response, routes::no_fields_to_update, utils::Database};

use super::ensure_reserved_table;

// Status changes go through `update_order_status`
#[derive(Deserialize, Debug)]
pub struct UpdateOrderBody{
    pub table_id: Option<String>,
    pub order_date: Option<DateTime<Utc>>
}

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusBody{
    pub status: Option<String>
}

fn order_not_found() -> ApiError{
    ApiError::NotFound("Order not found".to_string())
}

#[tracing::instrument(
    "Updating order",
    skip(db)
)]
pub async fn update_order(
    db: web::Data<Database>,
    order_id: web::Path<String>,
    body: web::Json<UpdateOrderBody>
) -> Result<HttpResponse, ApiError> {
    let order_id = order_id.into_inner();
    let body = body.into_inner();

    let current = get_order(&db, order_id.clone())
        .await?
        .ok_or_else(order_not_found)?;

    let table_id = non_empty(body.table_id)
        .filter(|table_id| *table_id != current.table_id);

    if table_id.is_none() && body.order_date.is_none() {
        return Err(no_fields_to_update());
    }

    if let Some(table_id) = &table_id {
        ensure_reserved_table(&db, table_id.clone()).await?;

        if table_has_other_open_order(&db, table_id.clone(), order_id.clone()).await? {
            return Err(ApiError::Conflict("Table is already assigned to another order.".to_string()));
        }
    }

    let changes = OrderChangeset{
        table_id,
        status: None,
        order_date: body.order_date,
        updated_at: Some(Utc::now())
    };

    let order = apply_order_changes(&db, order_id, changes)
        .await?
        .ok_or_else(order_not_found)?;

    Ok(response::ok("Order updated successfully", order))
}

#[tracing::instrument(
    "Updating order status",
    skip(db)
)]
pub async fn update_order_status(
    db: web::Data<Database>,
    order_id: web::Path<String>,
    body: web::Json<UpdateOrderStatusBody>
) -> Result<HttpResponse, ApiError> {
    let status = non_empty(body.into_inner().status)
        .ok_or_else(|| ApiError::BadRequest("status is required".to_string()))?;
    let status = OrderStatus::parse(&status)
        .map_err(|_| ApiError::BadRequest("Invalid order status".to_string()))?;

    let changes = OrderChangeset{
        status: Some(status.as_str().to_string()),
        updated_at: Some(Utc::now()),
        ..Default::default()
    };

    let order = apply_order_changes(&db, order_id.into_inner(), changes)
        .await?
        .ok_or_else(order_not_found)?;

    Ok(response::ok("Order status updated successfully", order))
}
