use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::Pagination, models::{Menu, MenuChangeset}, schema::menus, utils::{Database, QueryError}};

#[tracing::instrument(
    "Inserting menu into the database",
    skip_all,
    fields(menu_id = %menu.menu_id)
)]
pub async fn insert_menu(
    db: &Database,
    menu: Menu
) -> Result<Menu, QueryError> {
    db.run(move |conn| {
        diesel::insert_into(menus::table)
            .values(menu)
            .returning(Menu::as_returning())
            .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting menu by id",
    skip(db)
)]
pub async fn get_menu(
    db: &Database,
    menu_id: String
) -> Result<Option<Menu>, QueryError> {
    db.run(move |conn| {
        menus::table
            .filter(menus::menu_id.eq(menu_id))
            .select(Menu::as_select())
            .first(conn)
            .optional()
    })
    .await
}

pub async fn menu_exists(
    db: &Database,
    menu_id: String
) -> Result<bool, QueryError> {
    db.run(move |conn| {
        diesel::select(diesel::dsl::exists(
            menus::table.filter(menus::menu_id.eq(menu_id))
        ))
        .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting menus from db",
    skip(db)
)]
pub async fn list_menus(
    db: &Database,
    pagination: Pagination
) -> Result<(Vec<Menu>, i64), QueryError> {
    db.run(move |conn| {
        let total = menus::table.count().get_result::<i64>(conn)?;

        let page = menus::table
            .select(Menu::as_select())
            .order((menus::created_at.asc(), menus::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

#[tracing::instrument(
    "Updating menu",
    skip(db)
)]
pub async fn update_menu(
    db: &Database,
    menu_id: String,
    changes: MenuChangeset
) -> Result<Option<Menu>, QueryError> {
    db.run(move |conn| {
        diesel::update(menus::table.filter(menus::menu_id.eq(menu_id)))
            .set(changes)
            .returning(Menu::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Deleting menu",
    skip(db)
)]
pub async fn delete_menu(
    db: &Database,
    menu_id: String
) -> Result<Option<Menu>, QueryError> {
    db.run(move |conn| {
        diesel::delete(menus::table.filter(menus::menu_id.eq(menu_id)))
            .returning(Menu::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}
