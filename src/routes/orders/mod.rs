mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use crate::{db_interaction::table::get_table, domain::TableStatus, error::ApiError, utils::Database};

// An order may only sit on a table that exists and is currently reserved
async fn ensure_reserved_table(db: &Database, table_id: String) -> Result<(), ApiError>{
    let table = get_table(db, table_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invalid table ID, table not found".to_string()))?;

    if TableStatus::parse(&table.status).ok() != Some(TableStatus::Reserved) {
        return Err(ApiError::BadRequest("Table is not reserved. Reserve the table first.".to_string()));
    }

    Ok(())
}
