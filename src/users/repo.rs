use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// First user ordered by primary key. Stands in for a session lookup
    /// until real authentication lands.
    pub async fn first(db: &SqlitePool) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, created_at
            FROM users
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
        is_active: bool,
    ) -> anyhow::Result<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, is_active, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password, is_active, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(is_active)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
