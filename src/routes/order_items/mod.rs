mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use crate::{db_interaction::order_item::ItemRejection, domain::missing_foods_message, error::ApiError};

impl From<ItemRejection> for ApiError {
    fn from(rejection: ItemRejection) -> Self {
        match rejection {
            ItemRejection::OrderNotFound => ApiError::NotFound("Order not found".to_string()),
            ItemRejection::ItemNotFound => ApiError::NotFound("Order item not found".to_string()),
            ItemRejection::OrderClosed(status) => {
                ApiError::Conflict(format!("Items cannot be added to an order in status '{}'", status))
            },
            ItemRejection::TableMismatch => ApiError::BadRequest("Invalid table ID for this order".to_string()),
            ItemRejection::UnknownFoods(missing) => ApiError::BadRequest(missing_foods_message(&missing)),
            ItemRejection::QuantityTooLarge(name) => {
                ApiError::BadRequest(format!("Total quantity of '{}' is too large", name))
            }
        }
    }
}
