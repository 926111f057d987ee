use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use serde::Serialize;
use uuid::Uuid;

use crate::schema::{foods, invoices, menus, order_items, orders, tables, users};

// Public identifier exposed next to the store assigned primary key
pub fn public_id(id: &Uuid) -> String{
    id.simple().to_string()
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User{
    pub id: Uuid,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

// What a user looks like over the wire, no credentials
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserProfile{
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self{
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at
        }
    }
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = tables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Table{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub table_id: String,
    pub table_number: Option<i32>,
    pub number_of_guests: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = tables)]
pub struct TableChangeset{
    pub table_number: Option<i32>,
    pub number_of_guests: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = menus)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Menu{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub menu_id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing)]
    pub unique_key: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = menus)]
pub struct MenuChangeset{
    pub name: Option<String>,
    pub category: Option<String>,
    pub unique_key: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = foods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Food{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub food_id: String,
    pub name: String,
    pub price: f64,
    pub food_image: Option<String>,
    pub menu_id: String,
    #[serde(skip_serializing)]
    pub unique_food_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = foods)]
pub struct FoodChangeset{
    pub name: Option<String>,
    pub price: Option<f64>,
    pub food_image: Option<String>,
    pub menu_id: Option<String>,
    pub unique_food_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub order_id: String,
    pub table_id: String,
    pub user_id: String,
    pub status: String,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = orders)]
pub struct OrderChangeset{
    pub table_id: Option<String>,
    pub status: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub order_item_id: String,
    pub order_id: String,
    pub table_id: String,
    // food name -> quantity
    pub items: serde_json::Value,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Queryable, Selectable, Insertable, Serialize, Debug, Clone)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Invoice{
    #[serde(skip_serializing)]
    pub id: Uuid,
    pub invoice_id: String,
    pub order_id: String,
    pub user_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub total_price: f64,
    pub payment_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = invoices)]
pub struct InvoiceChangeset{
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub total_price: Option<f64>,
    pub payment_date: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>
}
