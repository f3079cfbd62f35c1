pub mod health;
pub mod items;
pub mod users;
pub mod warehouse;

use axum::Router;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Offset pagination shared by every listing endpoint. `limit` is
/// caller-controlled with no upper cap.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl Pagination {
    pub fn validate(&self) -> AppResult<()> {
        if self.skip < 0 || self.limit < 0 {
            return Err(AppError::InvalidInput(
                "skip and limit must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .nest("/api/v1/users", users::routes())
        .nest("/api/v1/items", items::routes())
        .nest("/api/v1/warehouse", warehouse::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_hundred() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 100);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn pagination_limit_is_uncapped() {
        let page: Pagination = serde_json::from_str(r#"{"limit": 1000000}"#).unwrap();
        assert!(page.validate().is_ok());
        assert_eq!(page.limit, 1_000_000);
    }

    #[test]
    fn negative_pagination_is_rejected() {
        let page: Pagination = serde_json::from_str(r#"{"skip": -1}"#).unwrap();
        assert!(page.validate().is_err());
        let page: Pagination = serde_json::from_str(r#"{"limit": -5}"#).unwrap();
        assert!(page.validate().is_err());
    }
}
