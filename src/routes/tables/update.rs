use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::{db_interaction::table::{transition_table_status, update_table as apply_table_changes, StatusTransition}, domain::TableStatus, error::ApiError, models::TableChangeset, response, routes::no_fields_to_update, utils::Database};

use super::TableBody;

#[tracing::instrument(
    "Updating table",
    skip(db)
)]
pub async fn update_table(
    db: web::Data<Database>,
    table_id: web::Path<String>,
    body: web::Json<TableBody>
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(ApiError::BadRequest)?;

    if body.table_number.is_none() && body.number_of_guests.is_none() {
        return Err(no_fields_to_update());
    }

    let changes = TableChangeset{
        table_number: body.table_number,
        number_of_guests: body.number_of_guests,
        updated_at: Some(Utc::now())
    };

    let table = apply_table_changes(&db, table_id.into_inner(), changes)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Table number already exists"))?
        .ok_or_else(|| ApiError::NotFound("Table not found".to_string()))?;

    Ok(response::ok("Table updated successfully", table))
}

async fn change_status(
    db: &Database,
    table_id: String,
    step: fn(TableStatus) -> Result<TableStatus, &'static str>,
    message: &str
) -> Result<HttpResponse, ApiError> {
    match transition_table_status(db, table_id, step).await? {
        StatusTransition::Applied(table) => Ok(response::ok(message, table)),
        StatusTransition::Rejected(reason) => Err(ApiError::Conflict(reason.to_string())),
        StatusTransition::NotFound => Err(ApiError::NotFound("Table not found".to_string()))
    }
}

#[tracing::instrument(
    "Reserving table",
    skip(db)
)]
pub async fn reserve_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    change_status(&db, table_id.into_inner(), TableStatus::reserve, "Table reserved successfully").await
}

#[tracing::instrument(
    "Releasing table reservation",
    skip(db)
)]
pub async fn unreserve_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    change_status(&db, table_id.into_inner(), TableStatus::unreserve, "Table unreserved successfully").await
}
