use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use diesel::{Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};
use uuid::Uuid;

use crate::{domain::{items_from_json, items_to_json, price_items, requantify_items, OrderStatus, Pagination, PricedFood, PricingError}, models::{public_id, Order, OrderItem}, schema::{foods, order_items, orders}, utils::{Database, QueryError}};

/// Why an order item was not written. Checked before anything is persisted.
#[derive(Debug, PartialEq)]
pub enum ItemRejection{
    OrderNotFound,
    ItemNotFound,
    OrderClosed(String),
    TableMismatch,
    UnknownFoods(Vec<String>),
    QuantityTooLarge(String)
}

impl From<PricingError> for ItemRejection {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::UnknownFoods(missing) => ItemRejection::UnknownFoods(missing),
            PricingError::QuantityOverflow(name) => ItemRejection::QuantityTooLarge(name)
        }
    }
}

// Locks the parent order and returns its status if it no longer accepts
// item changes. An item whose order is gone is not blocked.
fn closed_order_status(
    conn: &mut PgConnection,
    order_id: &str
) -> Result<Option<String>, diesel::result::Error> {
    let status = orders::table
        .filter(orders::order_id.eq(order_id))
        .select(orders::status)
        .for_update()
        .get_result::<String>(conn)
        .optional()?;

    Ok(status.filter(|status| {
        OrderStatus::parse(status).map(|s| s.is_terminal()).unwrap_or(false)
    }))
}

// Current name and price of every requested food that exists
fn load_priced_foods(
    conn: &mut PgConnection,
    food_ids: Vec<String>
) -> Result<HashMap<String, PricedFood>, diesel::result::Error> {
    let rows = foods::table
        .filter(foods::food_id.eq_any(food_ids))
        .select((foods::food_id, foods::name, foods::price))
        .load::<(String, String, f64)>(conn)?;

    Ok(rows.into_iter()
        .map(|(food_id, name, price)| (food_id, PricedFood{ name, price }))
        .collect())
}

/// Prices `items` (food id -> quantity) and stores them on `order_id`.
/// The parent order row is locked for the duration, a pending order is
/// promoted to placed in the same transaction.
#[tracing::instrument(
    "Inserting order item into the database",
    skip(db)
)]
pub async fn create_order_item(
    db: &Database,
    order_id: String,
    table_id: String,
    items: BTreeMap<String, i32>
) -> Result<Result<OrderItem, ItemRejection>, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let order = orders::table
                .filter(orders::order_id.eq(&order_id))
                .select(Order::as_select())
                .for_update()
                .get_result(conn)
                .optional()?;

            let Some(order) = order else {
                return Ok(Err(ItemRejection::OrderNotFound));
            };

            let status = OrderStatus::parse(&order.status).ok();
            if status.map(|s| s.is_terminal()).unwrap_or(false) {
                return Ok(Err(ItemRejection::OrderClosed(order.status)));
            }

            if order.table_id != table_id {
                return Ok(Err(ItemRejection::TableMismatch));
            }

            let foods = load_priced_foods(conn, items.keys().cloned().collect())?;
            let priced = match price_items(&items, &foods) {
                Ok(priced) => priced,
                Err(err) => return Ok(Err(err.into()))
            };

            let now = Utc::now();
            let id = Uuid::new_v4();
            let item = OrderItem{
                id,
                order_item_id: public_id(&id),
                order_id: order.order_id.clone(),
                table_id,
                items: items_to_json(&priced.items),
                total_price: priced.total_price,
                created_at: now,
                updated_at: now
            };

            let item = diesel::insert_into(order_items::table)
                .values(item)
                .returning(OrderItem::as_returning())
                .get_result(conn)?;

            if let Some(next) = status.and_then(OrderStatus::on_item_attached) {
                diesel::update(orders::table.filter(orders::order_id.eq(&order.order_id)))
                    .set((
                        orders::status.eq(next.as_str()),
                        orders::updated_at.eq(now)
                    ))
                    .execute(conn)?;
            }

            Ok(Ok(item))
        })
    })
    .await
}

/// Sets new quantities for foods already on the item and moves the total by
/// the price difference.
#[tracing::instrument(
    "Updating order item quantities",
    skip(db)
)]
pub async fn update_order_item_quantities(
    db: &Database,
    order_item_id: String,
    items: BTreeMap<String, i32>
) -> Result<Result<OrderItem, ItemRejection>, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let current = order_items::table
                .filter(order_items::order_item_id.eq(&order_item_id))
                .select(OrderItem::as_select())
                .for_update()
                .get_result(conn)
                .optional()?;

            let Some(current) = current else {
                return Ok(Err(ItemRejection::ItemNotFound));
            };

            if let Some(status) = closed_order_status(conn, &current.order_id)? {
                return Ok(Err(ItemRejection::OrderClosed(status)));
            }

            let current_items = items_from_json(&current.items)
                .map_err(|e| diesel::result::Error::DeserializationError(Box::new(e)))?;

            let foods = load_priced_foods(conn, items.keys().cloned().collect())?;
            let priced = match requantify_items(&current_items, current.total_price, &items, &foods) {
                Ok(priced) => priced,
                Err(missing) => return Ok(Err(ItemRejection::UnknownFoods(missing)))
            };

            let updated = diesel::update(order_items::table.filter(order_items::order_item_id.eq(&order_item_id)))
                .set((
                    order_items::items.eq(items_to_json(&priced.items)),
                    order_items::total_price.eq(priced.total_price),
                    order_items::updated_at.eq(Utc::now())
                ))
                .returning(OrderItem::as_returning())
                .get_result(conn)?;

            Ok(Ok(updated))
        })
    })
    .await
}

#[tracing::instrument(
    "Getting order item by id",
    skip(db)
)]
pub async fn get_order_item(
    db: &Database,
    order_item_id: String
) -> Result<Option<OrderItem>, QueryError> {
    db.run(move |conn| {
        order_items::table
            .filter(order_items::order_item_id.eq(order_item_id))
            .select(OrderItem::as_select())
            .first(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Getting order items from db",
    skip(db)
)]
pub async fn list_order_items(
    db: &Database,
    pagination: Pagination
) -> Result<(Vec<OrderItem>, i64), QueryError> {
    db.run(move |conn| {
        let total = order_items::table.count().get_result::<i64>(conn)?;

        let page = order_items::table
            .select(OrderItem::as_select())
            .order((order_items::created_at.asc(), order_items::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

// Every item of one order, oldest first
#[tracing::instrument(
    "Getting items of an order",
    skip(db)
)]
pub async fn get_items_of_order(
    db: &Database,
    order_id: String
) -> Result<Vec<OrderItem>, QueryError> {
    db.run(move |conn| {
        order_items::table
            .filter(order_items::order_id.eq(order_id))
            .select(OrderItem::as_select())
            .order((order_items::created_at.asc(), order_items::id.asc()))
            .load(conn)
    })
    .await
}

#[tracing::instrument(
    "Deleting order item",
    skip(db)
)]
pub async fn delete_order_item(
    db: &Database,
    order_item_id: String
) -> Result<Result<OrderItem, ItemRejection>, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let order_id = order_items::table
                .filter(order_items::order_item_id.eq(&order_item_id))
                .select(order_items::order_id)
                .get_result::<String>(conn)
                .optional()?;

            let Some(order_id) = order_id else {
                return Ok(Err(ItemRejection::ItemNotFound));
            };

            if let Some(status) = closed_order_status(conn, &order_id)? {
                return Ok(Err(ItemRejection::OrderClosed(status)));
            }

            let deleted = diesel::delete(order_items::table.filter(order_items::order_item_id.eq(&order_item_id)))
                .returning(OrderItem::as_returning())
                .get_result(conn)
                .optional()?;

            Ok(deleted.ok_or(ItemRejection::ItemNotFound))
        })
    })
    .await
}
