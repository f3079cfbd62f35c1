use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored user row. `hashed_password` never leaves the server; responses go
/// through [`UserPublic`].
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<&UserModel> for UserPublic {
    fn from(user: &UserModel) -> Self {
        UserPublic {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}

/// Administrative patch; every field optional, absent fields keep the
/// stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl UserUpdate {
    pub fn apply(&self, user: &mut UserModel) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = Some(full_name.clone());
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = self.is_superuser {
            user.is_superuser = is_superuser;
        }
    }
}

/// Self-service patch; profile fields only.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdateMe {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl UserUpdateMe {
    pub fn apply(&self, user: &mut UserModel) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = Some(full_name.clone());
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsersPublic {
    pub data: Vec<UserPublic>,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> UserModel {
        UserModel {
            id: 42,
            email: "alice@example.com".to_string(),
            full_name: Some("Alice".to_string()),
            hashed_password: "$argon2id$stub".to_string(),
            is_active: true,
            is_superuser: false,
        }
    }

    #[test]
    fn public_shape_never_carries_the_password_hash() {
        let value = serde_json::to_value(UserPublic::from(&stored_user())).unwrap();
        assert!(value.get("hashed_password").is_none());
        assert_eq!(value["email"], "alice@example.com");
    }

    #[test]
    fn admin_patch_applies_only_present_fields() {
        let mut user = stored_user();
        let patch: UserUpdate =
            serde_json::from_str(r#"{"is_superuser": true}"#).unwrap();
        patch.apply(&mut user);
        assert!(user.is_superuser);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.full_name.as_deref(), Some("Alice"));
        assert!(user.is_active);
    }

    #[test]
    fn profile_patch_cannot_touch_flags() {
        let patch: UserUpdateMe = serde_json::from_str(r#"{"full_name": "A."}"#).unwrap();
        let mut user = stored_user();
        patch.apply(&mut user);
        assert_eq!(user.full_name.as_deref(), Some("A."));
        assert!(!user.is_superuser);
    }
}
