mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const MENU_NAME_LENGTH: (usize, usize) = (2, 100);
pub const MENU_CATEGORY_LENGTH: (usize, usize) = (2, 50);

#[derive(Deserialize, Debug)]
pub struct MenuBody{
    pub name: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>
}
