use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A favorite links one user to exactly one target: a planet or a person.
/// The API only ever sets one of the two target columns; partial unique
/// indexes on (user_id, planet_id) and (user_id, people_id) guarantee no
/// duplicates even under concurrent inserts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

impl Favorite {
    pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<Favorite>> {
        let rows = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, planet_id, people_id
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_planet(
        db: &SqlitePool,
        user_id: i64,
        planet_id: i64,
    ) -> anyhow::Result<Option<Favorite>> {
        let row = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, planet_id, people_id
            FROM favorites
            WHERE user_id = $1 AND planet_id = $2
            "#,
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn find_by_person(
        db: &SqlitePool,
        user_id: i64,
        people_id: i64,
    ) -> anyhow::Result<Option<Favorite>> {
        let row = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, planet_id, people_id
            FROM favorites
            WHERE user_id = $1 AND people_id = $2
            "#,
        )
        .bind(user_id)
        .bind(people_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Returns the raw sqlx error so callers can distinguish a unique-index
    /// violation from infrastructure failures.
    pub async fn insert_planet(
        db: &SqlitePool,
        user_id: i64,
        planet_id: i64,
    ) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, planet_id)
            VALUES ($1, $2)
            RETURNING id, user_id, planet_id, people_id
            "#,
        )
        .bind(user_id)
        .bind(planet_id)
        .fetch_one(db)
        .await
    }

    pub async fn insert_person(
        db: &SqlitePool,
        user_id: i64,
        people_id: i64,
    ) -> Result<Favorite, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, people_id)
            VALUES ($1, $2)
            RETURNING id, user_id, planet_id, people_id
            "#,
        )
        .bind(user_id)
        .bind(people_id)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
