use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};

use crate::gql::domains::profiles::types::Profile;
use crate::gql::loaders::ProfileForUserLoader;
use infra::models::UserRow;
use infra::repos::UserSelector;

/// A registered user.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// The user's profile, if one has been created.
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let loader = ctx.data::<DataLoader<ProfileForUserLoader>>()?;
        let row = loader.load_one(self.id).await?;
        Ok(row.map(Profile::from))
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Selector for an existing user; set `id`, `email`, or both.
#[derive(InputObject)]
pub struct UserUniqueInput {
    pub id: Option<i32>,
    pub email: Option<String>,
}

impl From<UserUniqueInput> for UserSelector {
    fn from(input: UserUniqueInput) -> Self {
        Self {
            id: input.id,
            email: input.email,
        }
    }
}

#[derive(InputObject)]
pub struct UserCreateInput {
    pub email: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn user_row_maps_to_graphql_user() {
        let row = UserRow {
            id: 7,
            email: "grace@example.com".into(),
            name: Some("Grace".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user = User::from(row);
        assert_eq!(user.id, 7);
        assert_eq!(user.email, "grace@example.com");
        assert_eq!(user.name.as_deref(), Some("Grace"));
    }

    #[test]
    fn unique_input_passes_fields_through_to_selector() {
        let selector = UserSelector::from(UserUniqueInput {
            id: Some(3),
            email: None,
        });
        assert_eq!(selector.id, Some(3));
        assert!(selector.email.is_none());

        let selector = UserSelector::from(UserUniqueInput {
            id: None,
            email: Some("grace@example.com".into()),
        });
        assert!(selector.id.is_none());
        assert_eq!(selector.email.as_deref(), Some("grace@example.com"));
    }
}
