use async_graphql::{Context, Object, Result};

use super::types::Profile;
use crate::gql::domains::users::types::UserUniqueInput;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::{profiles, UserSelector};

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    /// Create a profile for an existing user, located by id and/or email.
    ///
    /// A user owns at most one profile; a second create trips the unique
    /// index on `profiles.user_id` and surfaces as an execution error.
    async fn add_profile_for_user(
        &self,
        ctx: &Context<'_>,
        user_unique_input: UserUniqueInput,
        bio: Option<String>,
    ) -> Result<Profile> {
        let state = ctx.data::<AppState>()?;

        let selector = UserSelector::from(user_unique_input);
        if selector.is_empty() {
            return Err(GqlError::new(
                "userUniqueInput must set at least one of `id` or `email`",
            )
            .into());
        }

        let row = profiles::create_for_user(&state.db, &selector, bio)
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::new("No user matches the given selector"))?;

        Ok(row.into())
    }
}
