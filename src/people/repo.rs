use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
}

impl Person {
    pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<Person>> {
        let rows = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, gender, birth_year, height
            FROM people
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, gender, birth_year, height
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn create(
        db: &SqlitePool,
        name: &str,
        gender: Option<&str>,
        birth_year: Option<&str>,
        height: Option<&str>,
    ) -> anyhow::Result<Person> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (name, gender, birth_year, height)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, gender, birth_year, height
            "#,
        )
        .bind(name)
        .bind(gender)
        .bind(birth_year)
        .bind(height)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
