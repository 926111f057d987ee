use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{auth::AuthenticatedUser, db_interaction::{order::insert_order, user::user_exists}, domain::{non_empty, OrderStatus}, error::ApiError, models::{public_id, Order}, response, utils::Database};

use super::ensure_reserved_table;

#[derive(Deserialize, Debug)]
pub struct CreateOrderBody{
    pub table_id: Option<String>,
    pub user_id: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    pub status: Option<String>
}

#[tracing::instrument(
    "Creating order",
    skip(db, user),
    fields(requested_by = %user.user_id())
)]
pub async fn create_order(
    db: web::Data<Database>,
    body: web::Json<CreateOrderBody>,
    user: AuthenticatedUser
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let table_id = non_empty(body.table_id)
        .ok_or_else(|| ApiError::BadRequest("table_id is required".to_string()))?;
    let status = match non_empty(body.status) {
        Some(status) => OrderStatus::parse(&status).map_err(ApiError::BadRequest)?,
        None => OrderStatus::Pending
    };
    let user_id = non_empty(body.user_id)
        .unwrap_or_else(|| user.user_id().to_string());

    ensure_reserved_table(&db, table_id.clone()).await?;

    if !user_exists(&db, user_id.clone()).await? {
        return Err(ApiError::NotFound("Invalid user ID, user not found".to_string()));
    }

    let now = Utc::now();
    let id = Uuid::new_v4();
    let order = Order{
        id,
        order_id: public_id(&id),
        table_id,
        user_id,
        status: status.as_str().to_string(),
        order_date: body.order_date.unwrap_or(now),
        created_at: now,
        updated_at: now
    };

    let order = insert_order(&db, order).await?;

    Ok(response::created("Order created successfully", order))
}
