use actix_web::{web, HttpResponse};

use crate::{db_interaction::table::delete_table as remove_table, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting table",
    skip(db)
)]
pub async fn delete_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let table = remove_table(&db, table_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Table not found".to_string()))?;

    Ok(response::ok("Table deleted successfully", table))
}
