use actix_web::{web, HttpResponse};

use crate::{db_interaction::{order::get_order, order_item::{get_items_of_order, get_order_item as find_order_item, list_order_items}}, error::ApiError, response, routes::PageQuery, utils::Database};

#[tracing::instrument(
    "Getting list of order items",
    skip(db)
)]
pub async fn get_order_items(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (items, total) = list_order_items(&db, pagination).await?;

    Ok(response::ok_page(
        "Order items retrieved successfully",
        items,
        pagination.page_info("total_orderitems", total)
    ))
}

#[tracing::instrument(
    "Getting order item",
    skip(db)
)]
pub async fn get_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let item = find_order_item(&db, order_item_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Order item not found".to_string()))?;

    Ok(response::ok("Order item retrieved successfully", item))
}

#[tracing::instrument(
    "Getting items of an order",
    skip(db)
)]
pub async fn get_order_items_by_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let order = get_order(&db, order_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    let items = get_items_of_order(&db, order.order_id).await?;

    Ok(response::ok("Order items retrieved successfully", items))
}
