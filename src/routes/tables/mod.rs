mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use serde::Deserialize;

// `status` is not accepted here, it only changes through reserve / unreserve
#[derive(Deserialize, Debug)]
pub struct TableBody{
    pub table_number: Option<i32>,
    pub number_of_guests: Option<i32>
}

impl TableBody {
    pub fn validate(&self) -> Result<(), String>{
        if matches!(self.table_number, Some(n) if n < 1) {
            return Err("table_number must be a positive number".to_string());
        }
        if matches!(self.number_of_guests, Some(n) if n < 1) {
            return Err("number_of_guests must be a positive number".to_string());
        }
        Ok(())
    }
}
