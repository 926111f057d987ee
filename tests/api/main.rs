mod helpers;
mod health_check;
mod users;
mod tables;
mod menus;
mod foods;
mod orders;
mod order_items;
mod invoices;
