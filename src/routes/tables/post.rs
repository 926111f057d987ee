use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::{db_interaction::table::insert_table, domain::TableStatus, error::ApiError, models::{public_id, Table}, response, utils::Database};

use super::TableBody;

#[tracing::instrument(
    "Creating table",
    skip(db)
)]
pub async fn create_table(
    db: web::Data<Database>,
    body: web::Json<TableBody>
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(ApiError::BadRequest)?;

    let now = Utc::now();
    let id = Uuid::new_v4();
    let table = Table{
        id,
        table_id: public_id(&id),
        table_number: body.table_number,
        number_of_guests: body.number_of_guests,
        status: TableStatus::NotReserved.as_str().to_string(),
        created_at: now,
        updated_at: now
    };

    let table = insert_table(&db, table)
        .await
        .map_err(|e| ApiError::conflict_or_unexpected(e, "Table number already exists"))?;

    Ok(response::created("Table created successfully", table))
}
