use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::Pagination, models::User, schema::users, utils::{Database, QueryError}};

#[tracing::instrument(
    "Inserting user into the database",
    skip_all,
    fields(user_id = %user.user_id)
)]
pub async fn insert_user(
    db: &Database,
    user: User
) -> Result<User, QueryError> {
    db.run(move |conn| {
        diesel::insert_into(users::table)
            .values(user)
            .returning(User::as_returning())
            .get_result(conn)
    })
    .await
}

// Function to query user from email id
#[tracing::instrument(
    "Getting user by email",
    skip(db)
)]
pub async fn get_user_by_email(
    db: &Database,
    email: String
) -> Result<Option<User>, QueryError> {
    db.run(move |conn| {
        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
            .optional()
    })
    .await
}

#[tracing::instrument(
    "Getting user by id",
    skip(db)
)]
pub async fn get_user(
    db: &Database,
    user_id: String
) -> Result<Option<User>, QueryError> {
    db.run(move |conn| {
        users::table
            .filter(users::user_id.eq(user_id))
            .select(User::as_select())
            .first(conn)
            .optional()
    })
    .await
}

pub async fn user_exists(
    db: &Database,
    user_id: String
) -> Result<bool, QueryError> {
    db.run(move |conn| {
        diesel::select(diesel::dsl::exists(
            users::table.filter(users::user_id.eq(user_id))
        ))
        .get_result(conn)
    })
    .await
}

#[tracing::instrument(
    "Getting users from db",
    skip(db)
)]
pub async fn list_users(
    db: &Database,
    pagination: Pagination
) -> Result<(Vec<User>, i64), QueryError> {
    db.run(move |conn| {
        let total = users::table.count().get_result::<i64>(conn)?;

        let page = users::table
            .select(User::as_select())
            .order((users::created_at.asc(), users::id.asc()))
            .limit(pagination.limit())
            .offset(pagination.offset())
            .load(conn)?;

        Ok((page, total))
    })
    .await
}

/// Overwrites the stored token pair, `None` clears it.
/// Returns false when the user does not exist.
#[tracing::instrument(
    "Persisting user tokens",
    skip(db, token, refresh_token)
)]
pub async fn store_tokens(
    db: &Database,
    user_id: String,
    token: Option<String>,
    refresh_token: Option<String>
) -> Result<bool, QueryError> {
    let affected_rows = db.run(move |conn| {
        diesel::update(users::table.filter(users::user_id.eq(user_id)))
            .set((
                users::token.eq(token),
                users::refresh_token.eq(refresh_token),
                users::updated_at.eq(Utc::now())
            ))
            .execute(conn)
    })
    .await?;

    Ok(affected_rows == 1)
}

/// Current access token of a user: `None` for an unknown user,
/// `Some(None)` after logout.
pub async fn get_stored_token(
    db: &Database,
    user_id: String
) -> Result<Option<Option<String>>, QueryError> {
    db.run(move |conn| {
        users::table
            .filter(users::user_id.eq(user_id))
            .select(users::token)
            .first::<Option<String>>(conn)
            .optional()
    })
    .await
}
