mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use serde::Deserialize;

pub const FOOD_NAME_LENGTH: (usize, usize) = (2, 100);

#[derive(Deserialize, Debug)]
pub struct FoodBody{
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>
}
