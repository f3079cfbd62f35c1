use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not enough permissions: {0}")]
    PermissionDenied(String),

    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Integrity errors (SQLSTATE class 23) that inserts and updates can raise.
enum ConstraintKind {
    ForeignKey,
    Unique,
}

fn constraint_kind(code: &str) -> Option<ConstraintKind> {
    match code {
        "23503" => Some(ConstraintKind::ForeignKey),
        "23505" => Some(ConstraintKind::Unique),
        _ => None,
    }
}

impl AppError {
    /// Wraps a write-path storage error, turning integrity violations into
    /// client-visible `ConstraintViolation`s instead of opaque 500s.
    pub fn from_db(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if let Some(code) = db_err.code() {
                match constraint_kind(code.as_ref()) {
                    Some(ConstraintKind::ForeignKey) => {
                        return AppError::ConstraintViolation(
                            "referenced row does not exist".to_string(),
                        )
                    }
                    Some(ConstraintKind::Unique) => {
                        return AppError::ConstraintViolation(
                            "value conflicts with an existing row".to_string(),
                        )
                    }
                    None => {}
                }
            }
        }
        AppError::Database(err)
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::PermissionDenied(_) => (StatusCode::FORBIDDEN, "permission_denied"),
            AppError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            AppError::ConstraintViolation(_) => (StatusCode::CONFLICT, "constraint_violation"),
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            AppError::Database(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = if status.is_server_error() {
            tracing::error!("request failed: {}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "code": code, "message": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_codes_map_to_constraint_violation() {
        assert!(matches!(
            constraint_kind("23503"),
            Some(ConstraintKind::ForeignKey)
        ));
        assert!(matches!(
            constraint_kind("23505"),
            Some(ConstraintKind::Unique)
        ));
        assert!(constraint_kind("42P01").is_none());
        assert!(constraint_kind("08006").is_none());
    }

    #[test]
    fn client_errors_keep_their_status() {
        let cases = [
            (
                AppError::NotFound("warehouse item 3".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::PermissionDenied("not the owner".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::Unauthenticated("missing header".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::ConstraintViolation("dangling item id".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::InvalidInput("negative limit".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn storage_errors_surface_as_500() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_integrity_db_errors_stay_database_errors() {
        assert!(matches!(
            AppError::from_db(sqlx::Error::RowNotFound),
            AppError::Database(_)
        ));
    }
}
