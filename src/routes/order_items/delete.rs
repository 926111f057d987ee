use actix_web::{web, HttpResponse};

use crate::{db_interaction::order_item::delete_order_item as remove_order_item, error::ApiError, response, utils::Database};

#[tracing::instrument(
    "Deleting order item",
    skip(db)
)]
pub async fn delete_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>
) -> Result<HttpResponse, ApiError> {
    let item = remove_order_item(&db, order_item_id.into_inner()).await??;

    Ok(response::ok("Order item deleted successfully", item))
}
