use actix_web::{web, HttpResponse};

use crate::{db_interaction::{order::{get_order as find_order, list_orders, OrderFilter}, table::table_exists, user::user_exists}, error::ApiError, response, routes::PageQuery, utils::Database};

async fn orders_page(
    db: &Database,
    filter: OrderFilter,
    query: &PageQuery
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (orders, total) = list_orders(db, filter, pagination).await?;

    Ok(response::ok_page(
        "Orders retrieved successfully",
        orders,
        pagination.page_info("total_orders", total)
    ))
}

#[tracing::instrument(
    "Getting list of orders",
    skip(db)
)]
pub async fn get_orders(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    orders_page(&db, OrderFilter::All, &query).await
}

#[tracing::instrument(
    "Getting orders of a table",
    skip(db)
)]
pub async fn get_orders_by_table(
    db: web::Data<Database>,
    table_id: web::Path<String>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let table_id = table_id.into_inner();
    if !table_exists(&db, table_id.clone()).await? {
        return Err(ApiError::NotFound("Table not found".to_string()));
    }

    orders_page(&db, OrderFilter::Table(table_id), &query).await
}

#[tracing::instrument(
    "Getting orders of a user",
    skip(db)
)]
pub async fn get_orders_by_user(
    db: web::Data<Database>,
    user_id: web::Path<String>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let user_id = user_id.into_inner();
    if !user_exists(&db, user_id.clone()).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    orders_page(&db, OrderFilter::User(user_id), &query).await
}

#[tracing::instrument(
    "Getting order",
    skip(db)
)]
pub async fn get_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let order = find_order(&db, order_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    Ok(response::ok("Order retrieved successfully", order))
}
