use sqlx::{QueryBuilder, Result};

use crate::{db::Db, models::ProfileRow, repos::users::UserSelector};

/// Insert a profile linked to the user matched by `selector`.
///
/// Lookup and insert run as one statement, so the link is atomic. Returns
/// `None` when the selector matches no user; a user that already owns a
/// profile trips the unique index on `profiles.user_id`.
pub async fn create_for_user(
    db: &Db,
    selector: &UserSelector,
    bio: Option<String>,
) -> Result<Option<ProfileRow>> {
    if selector.is_empty() {
        return Ok(None);
    }

    let mut query = QueryBuilder::new("INSERT INTO profiles (bio, user_id) SELECT ");
    query.push_bind(&bio);
    query.push("::text, id FROM users WHERE 1=1");

    if let Some(id) = selector.id {
        query.push(" AND id = ");
        query.push_bind(id);
    }

    if let Some(email) = &selector.email {
        query.push(" AND email = ");
        query.push_bind(email);
    }

    query.push(" RETURNING id, bio, user_id, created_at, updated_at");

    let row = query
        .build_query_as::<ProfileRow>()
        .fetch_optional(db)
        .await?;

    Ok(row)
}
