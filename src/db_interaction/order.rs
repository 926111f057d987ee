use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::{OrderStatus, Pagination}, models::{Order, OrderChangeset}, schema::orders, utils::{Database, QueryError}};

#[derive(Debug, Clone)]
pub enum OrderFilter{
    All,
    Table(String),
    User(String)
}

#[tracing::instrument(
    "Inserting order into the database",
    skip_all,
    fields(order_id = %order.order_id)
)]
pub async fn insert_order(
    db: &Database,
    order: Order
) -> Result<Order, QueryError> {
    db.run(move |conn| {
        diesel::insert_into(orders::table)
            .values(order)
            .returning(Order::as_returning())
            .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting order by id",
    skip(db)
)]
pub async fn get_order(
    db: &Database,
    order_id: String
) -> Result<Option<Order>, QueryError> {
    db.run(move |conn| {
        orders::table
            .filter(orders::order_id.eq(order_id))
            .select(Order::as_select())
            .first(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Getting orders from db",
    skip(db)
)]
pub async fn list_orders(
    db: &Database,
    filter: OrderFilter,
    pagination: Pagination
) -> Result<(Vec<Order>, i64), QueryError> {
    db.run(move |conn| {
        let mut count_query = orders::table.into_boxed();
        let mut page_query = orders::table.into_boxed();

        match filter {
            OrderFilter::All => {},
            OrderFilter::Table(table_id) => {
                count_query = count_query.filter(orders::table_id.eq(table_id.clone()));
                page_query = page_query.filter(orders::table_id.eq(table_id));
            },
            OrderFilter::User(user_id) => {
                count_query = count_query.filter(orders::user_id.eq(user_id.clone()));
                page_query = page_query.filter(orders::user_id.eq(user_id));
            }
        }

        let total = count_query.count().get_result::<i64>(conn)?;

        let page = page_query
            .select(Order::as_select())
            .order((orders::created_at.asc(), orders::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

/// Whether some order other than `order_id` is still open on `table_id`
#[tracing::instrument(
    "Checking table availability",
    skip(db)
)]
pub async fn table_has_other_open_order(
    db: &Database,
    table_id: String,
    order_id: String
) -> Result<bool, QueryError> {
    let closed: Vec<&'static str> = OrderStatus::ALL
        .into_iter()
        .filter(OrderStatus::is_terminal)
        .map(|status| status.as_str())
        .collect();

    db.run(move |conn| {
        diesel::select(diesel::dsl::exists(
            orders::table
                .filter(orders::table_id.eq(table_id))
                .filter(orders::order_id.ne(order_id))
                .filter(orders::status.ne_all(closed))
        ))
        .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Updating order",
    skip(db)
)]
pub async fn update_order(
    db: &Database,
    order_id: String,
    changes: OrderChangeset
) -> Result<Option<Order>, QueryError> {
    db.run(move |conn| {
        diesel::update(orders::table.filter(orders::order_id.eq(order_id)))
            .set(changes)
            .returning(Order::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Deleting order",
    skip(db)
)]
pub async fn delete_order(
    db: &Database,
    order_id: String
) -> Result<Option<Order>, QueryError> {
    db.run(move |conn| {
        diesel::delete(orders::table.filter(orders::order_id.eq(order_id)))
            .returning(Order::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}
