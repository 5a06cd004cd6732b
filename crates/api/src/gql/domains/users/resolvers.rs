use async_graphql::{Context, Object, Result};

use super::types::{User, UserCreateInput};
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{users, users::CreateUserData};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Every user, unfiltered.
    async fn all_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        let rows = users::list(&state.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// A single user by primary key; null when no user has that id.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        let row = users::get_by_id(&state.db, id).await?;
        Ok(row.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn signup_user(&self, ctx: &Context<'_>, data: UserCreateInput) -> Result<User> {
        let state = ctx.data::<AppState>()?;

        // Check if a user with this email already exists
        let existing = users::get_by_email(&state.db, &data.email).await?;
        if existing.is_some() {
            return Err(async_graphql::Error::new(
                "A user with this email already exists",
            ));
        }

        let create_data = CreateUserData {
            email: data.email,
            name: data.name,
        };

        let row = users::create(&state.db, create_data)
            .await
            .gql_err("Failed to create user")?;

        Ok(row.into())
    }
}
