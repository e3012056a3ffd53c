use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
}

impl Planet {
    pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<Planet>> {
        let rows = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, climate, population
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Planet>> {
        let row = sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, climate, population
            FROM planets
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
        climate: Option<&str>,
        population: Option<&str>,
    ) -> anyhow::Result<Planet> {
        let row = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, climate, population)
            VALUES ($1, $2, $3)
            RETURNING id, name, climate, population
            "#,
        )
        .bind(name)
        .bind(climate)
        .bind(population)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
