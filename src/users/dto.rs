use serde::Serialize;

use super::repo::User;

/// Public part of the user returned to clients. The password column never
/// crosses this boundary.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            is_active: u.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn user() -> User {
        User {
            id: 1,
            email: "luke@rebellion.org".into(),
            password: "$argon2id$fake".into(),
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn view_never_contains_password() {
        let json = serde_json::to_value(UserView::from(user())).unwrap();
        assert_eq!(json["email"], "luke@rebellion.org");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn row_serialization_skips_password() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("password").is_none());
    }
}
