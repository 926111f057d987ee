use actix_web::{web, HttpResponse};

use crate::{db_interaction::{invoice::{get_invoice as find_invoice, get_invoice_by_order as find_invoice_by_order, list_invoices, InvoiceFilter}, user::user_exists}, domain::PaymentStatus, error::ApiError, response, routes::PageQuery, utils::Database};

async fn invoices_page(
    db: &Database,
    filter: InvoiceFilter,
    query: &PageQuery,
    message: &str
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (invoices, total) = list_invoices(db, filter, pagination).await?;

    Ok(response::ok_page(
        message,
        invoices,
        pagination.page_info("total_invoices", total)
    ))
}

#[tracing::instrument(
    "Getting list of invoices",
    skip(db)
)]
pub async fn get_invoices(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    invoices_page(&db, InvoiceFilter::All, &query, "Invoices retrieved successfully").await
}

#[tracing::instrument(
    "Getting invoices of a user",
    skip(db)
)]
pub async fn get_invoices_by_user(
    db: web::Data<Database>,
    user_id: web::Path<String>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    let user_id = user_id.into_inner();
    if !user_exists(&db, user_id.clone()).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    invoices_page(&db, InvoiceFilter::User(user_id), &query, "Invoices retrieved successfully").await
}

#[tracing::instrument(
    "Getting pending invoices",
    skip(db)
)]
pub async fn get_pending_invoices(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    invoices_page(
        &db,
        InvoiceFilter::Status(PaymentStatus::Pending),
        &query,
        "Pending invoices retrieved successfully"
    ).await
}

#[tracing::instrument(
    "Getting paid invoices",
    skip(db)
)]
pub async fn get_paid_invoices(
    db: web::Data<Database>,
    query: web::Query<PageQuery>
) -> Result<HttpResponse, ApiError> {
    invoices_page(
        &db,
        InvoiceFilter::Status(PaymentStatus::Paid),
        &query,
        "Paid invoices retrieved successfully"
    ).await
}

#[tracing::instrument(
    "Getting invoice",
    skip(db)
)]
pub async fn get_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let invoice = find_invoice(&db, invoice_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?;

    Ok(response::ok("Invoice retrieved successfully", invoice))
}

#[tracing::instrument(
    "Getting invoice of an order",
    skip(db)
)]
pub async fn get_invoice_by_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let invoice = find_invoice_by_order(&db, order_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?;

    Ok(response::ok("Invoice retrieved successfully", invoice))
}
