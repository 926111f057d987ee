use actix_web::{web, HttpResponse};

use crate::{db_interaction::invoice::delete_invoice as remove_invoice, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting invoice",
    skip(db)
)]
pub async fn delete_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let invoice = remove_invoice(&db, invoice_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?;

    Ok(response::ok("Invoice deleted successfully", invoice))
}
