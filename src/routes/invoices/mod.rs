mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use crate::{db_interaction::invoice::InvoiceRejection, domain::{non_empty, PaymentMethod, PaymentStatus}, error::ApiError};

impl From<InvoiceRejection> for ApiError {
    fn from(rejection: InvoiceRejection) -> Self {
        match rejection {
            InvoiceRejection::InvoiceNotFound => ApiError::NotFound("Invoice not found".to_string()),
            InvoiceRejection::OrderNotFound => ApiError::NotFound("Order not found".to_string()),
            InvoiceRejection::UserNotFound => ApiError::NotFound("Invalid user ID, user not found".to_string())
        }
    }
}

fn parse_method(method: Option<String>) -> Result<Option<PaymentMethod>, ApiError>{
    non_empty(method)
        .map(|m| PaymentMethod::parse(&m))
        .transpose()
        .map_err(ApiError::BadRequest)
}

fn parse_status(status: Option<String>) -> Result<Option<PaymentStatus>, ApiError>{
    non_empty(status)
        .map(|s| PaymentStatus::parse(&s))
        .transpose()
        .map_err(ApiError::BadRequest)
}
