use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::Pagination, models::{Food, FoodChangeset}, schema::foods, utils::{Database, QueryError}};

#[tracing::instrument(
    "Inserting food into the database",
    skip_all,
    fields(food_id = %food.food_id)
)]
pub async fn insert_food(
    db: &Database,
    food: Food
) -> Result<Food, QueryError> {
    db.run(move |conn| {
        diesel::insert_into(foods::table)
            .values(food)
            .returning(Food::as_returning())
            .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting food by id",
    skip(db)
)]
pub async fn get_food(
    db: &Database,
    food_id: String
) -> Result<Option<Food>, QueryError> {
    db.run(move |conn| {
        foods::table
            .filter(foods::food_id.eq(food_id))
            .select(Food::as_select())
            .first(conn)
            .optional()
    })
    .await
}

/// One page of foods, optionally only those of one menu
#[tracing::instrument(
    "Getting foods from db",
    skip(db)
)]
pub async fn list_foods(
    db: &Database,
    menu_id: Option<String>,
    pagination: Pagination
) -> Result<(Vec<Food>, i64), QueryError> {
    db.run(move |conn| {
        let mut count_query = foods::table.into_boxed();
        let mut page_query = foods::table.into_boxed();

        if let Some(menu_id) = menu_id {
            count_query = count_query.filter(foods::menu_id.eq(menu_id.clone()));
            page_query = page_query.filter(foods::menu_id.eq(menu_id));
        }

        let total = count_query.count().get_result::<i64>(conn)?;

        let page = page_query
            .select(Food::as_select())
            .order((foods::created_at.asc(), foods::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

#[tracing::instrument(
    "Updating food",
    skip(db)
)]
pub async fn update_food(
    db: &Database,
    food_id: String,
    changes: FoodChangeset
) -> Result<Option<Food>, QueryError> {
    db.run(move |conn| {
        diesel::update(foods::table.filter(foods::food_id.eq(food_id)))
            .set(changes)
            .returning(Food::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Deleting food",
    skip(db)
)]
pub async fn delete_food(
    db: &Database,
    food_id: String
) -> Result<Option<Food>, QueryError> {
    db.run(move |conn| {
        diesel::delete(foods::table.filter(foods::food_id.eq(food_id)))
            .returning(Food::as_returning())
            .get_result(conn)
            .optional()
    })
    .await
}
