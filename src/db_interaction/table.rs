use chrono::Utc;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::{Pagination, TableStatus}, models::{Table, TableChangeset}, schema::tables, utils::{Database, QueryError}};

#[tracing::instrument(
    "Inserting table into the database",
    skip_all,
    fields(table_id = %table.table_id)
)]
pub async fn insert_table(
    db: &Database,
    table: Table
) -> Result<Table, QueryError> {
    db.run(move |conn| {
        diesel::insert_into(tables::table)
            .values(table)
            .returning(Table::as_returning())
            .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting table by id",
    skip(db)
)]
pub async fn get_table(
    db: &Database,
    table_id: String
) -> Result<Option<Table>, QueryError> {
    db.run(move |conn| {
        tables::table
            .filter(tables::table_id.eq(table_id))
            .select(Table::as_select())
            .first(conn)
            .optional()
    })
    .await
}

pub async fn table_exists(
    db: &Database,
    table_id: String
) -> Result<bool, QueryError> {
    db.run(move |conn| {
        diesel::select(diesel::dsl::exists(
            tables::table.filter(tables::table_id.eq(table_id))
        ))
        .get_result(conn)
    })
    .await
}

/// One page of tables in insertion order, optionally only those in `status`,
/// together with the number of matching tables.
#[tracing::instrument(
    "Getting tables from db",
    skip(db)
)]
pub async fn list_tables(
    db: &Database,
    status: Option<TableStatus>,
    pagination: Pagination
) -> Result<(Vec<Table>, i64), QueryError> {
    db.run(move |conn| {
        let mut count_query = tables::table.into_boxed();
        let mut page_query = tables::table.into_boxed();

        if let Some(status) = status {
            count_query = count_query.filter(tables::status.eq(status.as_str()));
            page_query = page_query.filter(tables::status.eq(status.as_str()));
        }

        let total = count_query.count().get_result::<i64>(conn)?;

        let page = page_query
            .select(Table::as_select())
            .order((tables::created_at.asc(), tables::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

#[tracing::instrument(
    "Updating table",
    skip(db)
)]
pub async fn update_table(
    db: &Database,
    table_id: String,
    changes: TableChangeset
) -> Result<Option<Table>, QueryError> {
    db.run(move |conn| {
        diesel::update(tables::table.filter(tables::table_id.eq(table_id)))
            .set(changes)
            .returning(Table::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Deleting table",
    skip(db)
)]
pub async fn delete_table(
    db: &Database,
    table_id: String
) -> Result<Option<Table>, QueryError> {
    db.run(move |conn| {
        diesel::delete(tables::table.filter(tables::table_id.eq(table_id)))
            .returning(Table::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}

#[derive(Debug)]
pub enum StatusTransition{
    Applied(Table),
    // table exists but `step` refused its current status
    Rejected(&'static str),
    NotFound
}

/// Applies `step` to the table's current status with the row locked, so two
/// concurrent reservations of the same table cannot both succeed.
#[tracing::instrument(
    "Changing table status",
    skip(db, step)
)]
pub async fn transition_table_status(
    db: &Database,
    table_id: String,
    step: fn(TableStatus) -> Result<TableStatus, &'static str>
) -> Result<StatusTransition, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let current = tables::table
                .filter(tables::table_id.eq(&table_id))
                .select(Table::as_select())
                .for_update()
                .get_result(conn)
                .optional()?;

            let Some(current) = current else {
                return Ok(StatusTransition::NotFound);
            };

            let status = TableStatus::parse(&current.status)
                .map_err(|e| diesel::result::Error::DeserializationError(e.into()))?;

            let next = match step(status) {
                Ok(next) => next,
                Err(reason) => return Ok(StatusTransition::Rejected(reason))
            };

            let table = diesel::update(tables::table.filter(tables::table_id.eq(&table_id)))
                .set((
                    tables::status.eq(next.as_str()),
                    tables::updated_at.eq(Utc::now())
                ))
                .returning(Table::as_returning())
                .get_result(conn)?;

            Ok(StatusTransition::Applied(table))
        })
    })
    .await
}
