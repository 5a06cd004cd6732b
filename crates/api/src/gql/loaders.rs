use async_graphql::dataloader::Loader;
use infra::{db::Db, models::ProfileRow, models::UserRow};
use std::{collections::HashMap, future::Future, sync::Arc};

// ProfileForUserLoader - batch load profiles, keyed by the owning user's id
#[derive(Clone)]
pub struct ProfileForUserLoader {
    pool: Db,
}

impl ProfileForUserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<i32> for ProfileForUserLoader {
    type Value = ProfileRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<ProfileRow> = sqlx::query_as::<_, ProfileRow>(
                r#"
                SELECT id, bio, user_id, created_at, updated_at
                FROM profiles
                WHERE user_id = ANY($1::int[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.user_id, r)).collect())
        }
    }
}

// UserForProfileLoader - batch load the owning user, keyed by profile id.
// A key that matches no stored profile simply yields no entry.
#[derive(Clone)]
pub struct UserForProfileLoader {
    pool: Db,
}

impl UserForProfileLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OwnerRow {
    profile_id: i32,
    #[sqlx(flatten)]
    user: UserRow,
}

impl Loader<i32> for UserForProfileLoader {
    type Value = UserRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[i32],
    ) -> impl Future<Output = std::result::Result<HashMap<i32, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<i32> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows: Vec<OwnerRow> = sqlx::query_as::<_, OwnerRow>(
                r#"
                SELECT p.id AS profile_id,
                       u.id, u.email, u.name, u.created_at, u.updated_at
                FROM profiles p
                JOIN users u ON u.id = p.user_id
                WHERE p.id = ANY($1::int[])
                "#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.profile_id, r.user)).collect())
        }
    }
}
