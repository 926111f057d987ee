use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{db_interaction::invoice::{update_invoice as apply_invoice_update, InvoiceUpdate}, error::ApiError, response, routes::no_fields_to_update, utils::Database};

use super::{parse_method, parse_status};

#[derive(Deserialize, Debug)]
pub struct UpdateInvoiceBody{
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_date: Option<DateTime<Utc>>
}

#[tracing::instrument(
    "Updating invoice",
    skip(db)
)]
pub async fn update_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>,
    body: web::Json<UpdateInvoiceBody>
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let update = InvoiceUpdate{
        payment_method: parse_method(body.payment_method)?,
        payment_status: parse_status(body.payment_status)?,
        payment_date: body.payment_date
    };

    if update.payment_method.is_none() && update.payment_status.is_none() && update.payment_date.is_none() {
        return Err(no_fields_to_update());
    }

    let invoice = apply_invoice_update(&db, invoice_id.into_inner(), update).await??;

    Ok(response::ok("Invoice updated successfully", invoice))
}
