use actix_web::{web, HttpResponse};

use crate::{db_interaction::table::{get_table as find_table, list_tables}, domain::TableStatus, error::ApiError, response, routes::PageQuery, utils::Database};

async fn tables_page(
    db: &Database,
    status: Option<TableStatus>,
    query: &PageQuery
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (tables, total) = list_tables(db, status, pagination).await?;

    Ok(response::ok_page(
        "Tables retrieved successfully",
        tables,
        pagination.page_info("total_tables", total)
    ))
}

#[tracing::instrument(
    "Getting list of tables",
    skip(db)
)]
pub async fn get_tables(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    tables_page(&db, None, &query).await
}

#[tracing::instrument(
    "Getting reserved tables",
    skip(db)
)]
pub async fn get_reserved_tables(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    tables_page(&db, Some(TableStatus::Reserved), &query).await
}

#[tracing::instrument(
    "Getting unreserved tables",
    skip(db)
)]
pub async fn get_unreserved_tables(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    tables_page(&db, Some(TableStatus::NotReserved), &query).await
}

#[tracing::instrument(
    "Getting table",
    skip(db)
)]
pub async fn get_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let table = find_table(&db, table_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Table not found".to_string()))?;

    Ok(response::ok("Table retrieved successfully", table))
}
