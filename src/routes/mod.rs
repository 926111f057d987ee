mod health_check;
pub mod foods;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;

pub use health_check::health_check;

use serde::Deserialize;

use crate::{domain::Pagination, error::ApiError};

// `?page=2&recordPerPage=20`, kept as text so bad values fall back to the defaults
#[derive(Deserialize, Debug)]
pub struct PageQuery{
    pub page: Option<String>,
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<String>
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination{
        Pagination::from_raw(self.page.as_deref(), self.record_per_page.as_deref())
    }
}

pub(crate) fn no_fields_to_update() -> ApiError{
    ApiError::BadRequest("No fields to update".to_string())
}
