use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use crate::gql::domains::users::types::User;
use crate::gql::loaders::UserForProfileLoader;
use infra::models::ProfileRow;

/// A user's profile; each user owns at most one.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Profile {
    pub id: i32,
    pub bio: Option<String>,
}

#[ComplexObject]
impl Profile {
    /// The user this profile belongs to.
    ///
    /// Looked up by the profile's own id; an id matching no stored profile
    /// resolves to null rather than erroring.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let loader = ctx.data::<DataLoader<UserForProfileLoader>>()?;
        let row = loader.load_one(self.id).await?;
        Ok(row.map(User::from))
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            bio: row.bio,
        }
    }
}
