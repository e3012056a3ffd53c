use serde::Serialize;
use sqlx::SqlitePool;

use crate::people::Person;
use crate::planets::Planet;

use super::repo::Favorite;

/// Wire form of a favorite. A target key is present exactly when the matching
/// foreign key is set; it carries an explicit null when the referenced row no
/// longer exists. At most one target key appears for rows created through the
/// API.
#[derive(Debug, Serialize)]
pub struct FavoriteView {
    pub id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<Option<Planet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Option<Person>>,
}

impl FavoriteView {
    pub async fn resolve(db: &SqlitePool, fav: &Favorite) -> anyhow::Result<Self> {
        let planet = match fav.planet_id {
            Some(id) => Some(Planet::find_by_id(db, id).await?),
            None => None,
        };
        let people = match fav.people_id {
            Some(id) => Some(Person::find_by_id(db, id).await?),
            None => None,
        };
        Ok(Self {
            id: fav.id,
            user_id: fav.user_id,
            planet,
            people,
        })
    }
}

/// 201 body for favorite-add operations.
#[derive(Debug, Serialize)]
pub struct FavoriteAdded {
    pub msg: String,
    pub favorite: FavoriteView,
}

/// 200 body for favorite-remove operations.
#[derive(Debug, Serialize)]
pub struct FavoriteRemoved {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_target_key_is_absent() {
        let view = FavoriteView {
            id: 7,
            user_id: 1,
            planet: Some(Some(Planet {
                id: 3,
                name: "Naboo".into(),
                climate: Some("temperate".into()),
                population: None,
            })),
            people: None,
        };
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["planet"]["id"], 3);
        assert!(json.get("people").is_none());
    }

    #[test]
    fn missing_target_row_serializes_as_null() {
        let view = FavoriteView {
            id: 7,
            user_id: 1,
            planet: Some(None),
            people: None,
        };
        let json = serde_json::to_value(view).unwrap();
        assert!(json["planet"].is_null());
        assert!(json.as_object().unwrap().contains_key("planet"));
    }
}
