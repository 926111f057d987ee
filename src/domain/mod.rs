pub mod field;
pub mod line_items;
pub mod menu_keys;
pub mod order_status;
pub mod pagination;
pub mod payment;
pub mod phone_number;
pub mod table_status;
pub mod user_email;

pub use field::*;
pub use line_items::*;
pub use menu_keys::*;
pub use order_status::*;
pub use pagination::*;
pub use payment::*;
pub use phone_number::*;
pub use table_status::*;
pub use user_email::*;
