use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{db_interaction::invoice::{create_invoice as insert_invoice, NewInvoice}, domain::{non_empty, PaymentStatus}, error::ApiError, response, utils::Database};

use super::{parse_method, parse_status};

// Any total_price in the body is ignored, the total comes from the order's items
#[derive(Deserialize, Debug)]
pub struct CreateInvoiceBody{
    pub order_id: Option<String>,
    pub user_id: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_date: Option<DateTime<Utc>>
}

#[tracing::instrument(
    "Creating invoice",
    skip(db)
)]
pub async fn create_invoice(
    db: web::Data<Database>,
    body: web::Json<CreateInvoiceBody>
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let new_invoice = NewInvoice{
        order_id: non_empty(body.order_id)
            .ok_or_else(|| ApiError::BadRequest("Order ID is required in invoice".to_string()))?,
        user_id: non_empty(body.user_id),
        payment_method: parse_method(body.payment_method)?,
        payment_status: parse_status(body.payment_status)?.unwrap_or(PaymentStatus::Pending),
        payment_date: body.payment_date
    };

    let invoice = insert_invoice(&db, new_invoice).await??;

    Ok(response::created("Invoice created successfully", invoice))
}
