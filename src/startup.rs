use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_actix_web::TracingLogger;

use crate::{auth::{AuthMiddlewareFactory, Tokenizer}, configuration::Settings, error::ApiError, routes::{foods, health_check, invoices, menus, order_items, orders, tables, users}, telemetry::spawn_blocking_with_tracing, utils::Database};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    /// Applies pending migrations, binds the listener and builds the server.
    /// Port 0 binds a random free port, read it back from `port`.
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let db = Database::connect_lazy(&settings.database);
        run_migrations(&db).await?;

        let tokenizer = Tokenizer::new(&settings.jwt);

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind listener")?;
        let port = listener.local_addr()?.port();

        let server = run(listener, db, tokenizer)?;

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }
}

#[tracing::instrument(
    "Running database migrations",
    skip_all
)]
async fn run_migrations(db: &Database) -> Result<(), anyhow::Error>{
    let pool = db.pool().clone();

    spawn_blocking_with_tracing(move || -> Result<(), anyhow::Error> {
        let mut conn = pool.get().context("Failed to get connection from pool")?;
        let applied = conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to run migrations")?;

        tracing::info!(count = applied.len(), "Applied pending migrations");
        Ok(())
    })
    .await
    .context("Failed due to threadpool error")?
}

pub fn run(
    listener: TcpListener,
    db: Database,
    tokenizer: Tokenizer
) -> Result<Server, anyhow::Error>{
    let db = web::Data::new(db);
    let tokenizer = web::Data::new(tokenizer);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .app_data(db.clone())
            .app_data(tokenizer.clone())
            .configure(public_routes)
            .service(
                web::scope("")
                    .wrap(AuthMiddlewareFactory)
                    .configure(protected_routes)
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Malformed bodies, paths and queries get the same envelope as every other client error
fn json_config() -> web::JsonConfig{
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig{
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig{
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn public_routes(cfg: &mut web::ServiceConfig){
    cfg.route("/health", web::get().to(health_check))
        .route("/users/signup", web::post().to(users::signup))
        .route("/users/login", web::post().to(users::login));
}

fn protected_routes(cfg: &mut web::ServiceConfig){
    cfg.route("/users/logout", web::post().to(users::logout))
        .route("/users", web::get().to(users::get_users))
        .route("/users/{user_id}", web::get().to(users::get_user))

        // fixed segments before `/tables/{table_id}`
        .route("/tables/reserved", web::get().to(tables::get_reserved_tables))
        .route("/tables/unreserved", web::get().to(tables::get_unreserved_tables))
        .route("/tables/reserve/{table_id}", web::put().to(tables::reserve_table))
        .route("/tables/unreserve/{table_id}", web::put().to(tables::unreserve_table))
        .route("/tables", web::get().to(tables::get_tables))
        .route("/tables", web::post().to(tables::create_table))
        .route("/tables/{table_id}", web::get().to(tables::get_table))
        .route("/tables/{table_id}", web::patch().to(tables::update_table))
        .route("/tables/{table_id}", web::delete().to(tables::delete_table))

        .route("/menus", web::get().to(menus::get_menus))
        .route("/menus", web::post().to(menus::create_menu))
        .route("/menus/{menu_id}", web::get().to(menus::get_menu))
        .route("/menus/{menu_id}", web::patch().to(menus::update_menu))
        .route("/menus/{menu_id}", web::delete().to(menus::delete_menu))

        .route("/foods/menu/{menu_id}", web::get().to(foods::get_foods_by_menu))
        .route("/foods", web::get().to(foods::get_foods))
        .route("/foods", web::post().to(foods::create_food))
        .route("/foods/{food_id}", web::get().to(foods::get_food))
        .route("/foods/{food_id}", web::patch().to(foods::update_food))
        .route("/foods/{food_id}", web::delete().to(foods::delete_food))

        .route("/orders/table/{table_id}", web::get().to(orders::get_orders_by_table))
        .route("/orders/user/{user_id}", web::get().to(orders::get_orders_by_user))
        .route("/orders/{order_id}/status", web::patch().to(orders::update_order_status))
        .route("/orders", web::get().to(orders::get_orders))
        .route("/orders", web::post().to(orders::create_order))
        .route("/orders/{order_id}", web::get().to(orders::get_order))
        .route("/orders/{order_id}", web::patch().to(orders::update_order))
        .route("/orders/{order_id}", web::delete().to(orders::delete_order))

        .route("/orderitems/{order_id}/order", web::get().to(order_items::get_order_items_by_order))
        .route("/orderitems", web::get().to(order_items::get_order_items))
        .route("/orderitems", web::post().to(order_items::create_order_item))
        .route("/orderitems/{order_item_id}", web::get().to(order_items::get_order_item))
        .route("/orderitems/{order_item_id}", web::patch().to(order_items::update_order_item))
        .route("/orderitems/{order_item_id}", web::delete().to(order_items::delete_order_item))

        .route("/invoices/order/{order_id}", web::get().to(invoices::get_invoice_by_order))
        .route("/invoices/user/{user_id}", web::get().to(invoices::get_invoices_by_user))
        .route("/invoices/status/pending", web::get().to(invoices::get_pending_invoices))
        .route("/invoices/status/paid", web::get().to(invoices::get_paid_invoices))
        .route("/invoices", web::get().to(invoices::get_invoices))
        .route("/invoices", web::post().to(invoices::create_invoice))
        .route("/invoices/{invoice_id}", web::get().to(invoices::get_invoice))
        .route("/invoices/{invoice_id}", web::patch().to(invoices::update_invoice))
        .route("/invoices/{invoice_id}", web::delete().to(invoices::delete_invoice));
}
