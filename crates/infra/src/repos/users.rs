use sqlx::Result;

use crate::{db::Db, models::UserRow};

/// Unique-key selector for locating a single user.
///
/// Omitted fields do not constrain the lookup; when both are set, both must
/// match. A selector with neither field set matches no row.
#[derive(Debug, Clone, Default)]
pub struct UserSelector {
    pub id: Option<i32>,
    pub email: Option<String>,
}

impl UserSelector {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: Option<String>,
}

pub async fn list(db: &Db) -> Result<Vec<UserRow>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, created_at, updated_at FROM users ORDER BY id",
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get_by_id(db: &Db, id: i32) -> Result<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get_by_email(db: &Db, email: &str) -> Result<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, created_at, updated_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Create a new user
pub async fn create(db: &Db, data: CreateUserData) -> Result<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, name)
        VALUES ($1, $2)
        RETURNING id, email, name, created_at, updated_at
        "#,
    )
    .bind(&data.email)
    .bind(&data.name)
    .fetch_one(db)
    .await?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::UserSelector;

    #[test]
    fn selector_emptiness() {
        assert!(UserSelector::default().is_empty());
        assert!(!UserSelector {
            id: Some(1),
            email: None
        }
        .is_empty());
        assert!(!UserSelector {
            id: None,
            email: Some("ada@example.com".into())
        }
        .is_empty());
    }
}
