use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::api::AppState;
use crate::db;
use crate::error::AppError;
use crate::models::UserModel;

/// Header carrying the authenticated user id. Session mechanics live in an
/// upstream gateway; by the time a request reaches this service the identity
/// is already established.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The actor a request runs as, passed into handlers as an explicit
/// parameter rather than ambient state.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserModel);

impl CurrentUser {
    /// Ownership check with the superuser bypass.
    pub fn can_act_on(&self, owner_id: i64) -> bool {
        self.0.is_superuser || self.0.id == owner_id
    }

    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn is_superuser(&self) -> bool {
        self.0.is_superuser
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthenticated(format!("missing {} header", USER_ID_HEADER))
            })?;

        let user_id: i64 = raw.parse().map_err(|_| {
            AppError::Unauthenticated(format!("malformed {} header", USER_ID_HEADER))
        })?;

        let user = db::users::get(&state.pool, user_id)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("unknown user".to_string()))?;

        if !user.is_active {
            return Err(AppError::PermissionDenied("inactive user".to_string()));
        }

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, is_superuser: bool) -> CurrentUser {
        CurrentUser(UserModel {
            id,
            email: format!("user{id}@example.com"),
            full_name: None,
            hashed_password: "$argon2id$stub".to_string(),
            is_active: true,
            is_superuser,
        })
    }

    #[test]
    fn owner_may_act_on_own_rows() {
        assert!(user(1, false).can_act_on(1));
    }

    #[test]
    fn non_owner_is_refused() {
        assert!(!user(1, false).can_act_on(2));
    }

    #[test]
    fn superuser_bypasses_ownership() {
        assert!(user(1, true).can_act_on(2));
    }
}
