use chrono::{DateTime, Utc};
use diesel::{Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};
use uuid::Uuid;

use crate::{domain::{invoice_total, OrderStatus, Pagination, PaymentMethod, PaymentStatus}, models::{public_id, Invoice, InvoiceChangeset, Order}, schema::{invoices, order_items, orders, users}, utils::{Database, QueryError}};

#[derive(Debug, Clone)]
pub enum InvoiceFilter{
    All,
    User(String),
    Status(PaymentStatus)
}

#[derive(Debug)]
pub struct NewInvoice{
    pub order_id: String,
    // falls back to the user of the order
    pub user_id: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<DateTime<Utc>>
}

#[derive(Debug, Default)]
pub struct InvoiceUpdate{
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: Option<DateTime<Utc>>
}

#[derive(Debug, PartialEq)]
pub enum InvoiceRejection{
    InvoiceNotFound,
    OrderNotFound,
    UserNotFound
}

// Sum of the totals of every item currently on the order
fn order_total(
    conn: &mut PgConnection,
    order_id: &str
) -> Result<f64, diesel::result::Error> {
    let totals = order_items::table
        .filter(order_items::order_id.eq(order_id))
        .select(order_items::total_price)
        .load::<f64>(conn)?;

    Ok(invoice_total(&totals))
}

fn mark_order_paid(
    conn: &mut PgConnection,
    order_id: &str,
    now: DateTime<Utc>
) -> Result<(), diesel::result::Error> {
    diesel::update(orders::table.filter(orders::order_id.eq(order_id)))
        .set((
            orders::status.eq(OrderStatus::Paid.as_str()),
            orders::updated_at.eq(now)
        ))
        .execute(conn)?;

    Ok(())
}

/// Writes an invoice whose total is computed from the order's items. A paid
/// invoice marks its order paid in the same transaction.
#[tracing::instrument(
    "Inserting invoice into the database",
    skip(db)
)]
pub async fn create_invoice(
    db: &Database,
    new_invoice: NewInvoice
) -> Result<Result<Invoice, InvoiceRejection>, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let order = orders::table
                .filter(orders::order_id.eq(&new_invoice.order_id))
                .select(Order::as_select())
                .for_update()
                .get_result(conn)
                .optional()?;

            let Some(order) = order else {
                return Ok(Err(InvoiceRejection::OrderNotFound));
            };

            let user_id = new_invoice.user_id.unwrap_or(order.user_id);
            let user_exists = diesel::select(diesel::dsl::exists(
                users::table.filter(users::user_id.eq(&user_id))
            ))
            .get_result::<bool>(conn)?;

            if !user_exists {
                return Ok(Err(InvoiceRejection::UserNotFound));
            }

            let now = Utc::now();
            let paid = new_invoice.payment_status.is_paid();
            let payment_date = match new_invoice.payment_date {
                Some(date) => Some(date),
                None if paid => Some(now),
                None => None
            };

            let id = Uuid::new_v4();
            let invoice = Invoice{
                id,
                invoice_id: public_id(&id),
                order_id: order.order_id.clone(),
                user_id,
                payment_method: new_invoice.payment_method.map(|m| m.as_str().to_string()),
                payment_status: new_invoice.payment_status.as_str().to_string(),
                total_price: order_total(conn, &order.order_id)?,
                payment_date,
                created_at: now,
                updated_at: now
            };

            let invoice = diesel::insert_into(invoices::table)
                .values(invoice)
                .returning(Invoice::as_returning())
                .get_result(conn)?;

            if paid {
                mark_order_paid(conn, &order.order_id, now)?;
            }

            Ok(Ok(invoice))
        })
    })
    .await
}

/// Merges the supplied fields, recomputes the total from the order's current
/// items and cascades the paid status to the order.
#[tracing::instrument(
    "Updating invoice",
    skip(db)
)]
pub async fn update_invoice(
    db: &Database,
    invoice_id: String,
    update: InvoiceUpdate
) -> Result<Result<Invoice, InvoiceRejection>, QueryError> {
    db.run(move |conn| {
        conn.transaction(|conn| {
            let current = invoices::table
                .filter(invoices::invoice_id.eq(&invoice_id))
                .select(Invoice::as_select())
                .for_update()
                .get_result(conn)
                .optional()?;

            let Some(current) = current else {
                return Ok(Err(InvoiceRejection::InvoiceNotFound));
            };

            let now = Utc::now();
            let paid = match update.payment_status {
                Some(status) => status.is_paid(),
                None => PaymentStatus::parse(&current.payment_status)
                            .map(|s| s.is_paid())
                            .unwrap_or(false)
            };

            let payment_date = match update.payment_date {
                Some(date) => Some(date),
                None if paid && current.payment_date.is_none() => Some(now),
                None => None
            };

            let changes = InvoiceChangeset{
                payment_method: update.payment_method.map(|m| m.as_str().to_string()),
                payment_status: update.payment_status.map(|s| s.as_str().to_string()),
                total_price: Some(order_total(conn, &current.order_id)?),
                payment_date,
                updated_at: Some(now)
            };

            let updated = diesel::update(invoices::table.filter(invoices::invoice_id.eq(&invoice_id)))
                .set(changes)
                .returning(Invoice::as_returning())
                .get_result(conn)?;

            if paid {
                mark_order_paid(conn, &updated.order_id, now)?;
            }

            Ok(Ok(updated))
        })
    })
    .await
}

#[tracing::instrument(
    "Getting invoice by id",
    skip(db)
)]
pub async fn get_invoice(
    db: &Database,
    invoice_id: String
) -> Result<Option<Invoice>, QueryError> {
    db.run(move |conn| {
        invoices::table
            .filter(invoices::invoice_id.eq(invoice_id))
            .select(Invoice::as_select())
            .first(conn)
            .optional()
    })
    .await
}

// Latest invoice issued for an order
#[tracing::instrument(
    "Getting invoice of an order",
    skip(db)
)]
pub async fn get_invoice_by_order(
    db: &Database,
    order_id: String
) -> Result<Option<Invoice>, QueryError> {
    db.run(move |conn| {
        invoices::table
            .filter(invoices::order_id.eq(order_id))
            .select(Invoice::as_select())
            .order((invoices::created_at.desc(), invoices::id.desc()))
            .first(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Getting invoices from db",
    skip(db)
)]
pub async fn list_invoices(
    db: &Database,
    filter: InvoiceFilter,
    pagination: Pagination
) -> Result<(Vec<Invoice>, i64), QueryError> {
    db.run(move |conn| {
        let mut count_query = invoices::table.into_boxed();
        let mut page_query = invoices::table.into_boxed();

        match filter {
            InvoiceFilter::All => {},
            InvoiceFilter::User(user_id) => {
                count_query = count_query.filter(invoices::user_id.eq(user_id.clone()));
                page_query = page_query.filter(invoices::user_id.eq(user_id));
            },
            InvoiceFilter::Status(status) => {
                count_query = count_query.filter(invoices::payment_status.eq(status.as_str()));
                page_query = page_query.filter(invoices::payment_status.eq(status.as_str()));
            }
        }

        let total = count_query.count().get_result::<i64>(conn)?;

        let page = page_query
            .select(Invoice::as_select())
            .order((invoices::created_at.asc(), invoices::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

#[tracing::instrument(
    "Deleting invoice",
    skip(db)
)]
pub async fn delete_invoice(
    db: &Database,
    invoice_id: String
) -> Result<Option<Invoice>, QueryError> {
    db.run(move |conn| {
        diesel::delete(invoices::table.filter(invoices::invoice_id.eq(invoice_id)))
            .returning(Invoice::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}
