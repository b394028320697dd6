//! Unified service-layer error type for order-server
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`, `BoxError`) and the
//! API-layer error (`AppError`), so handlers can use `?` on store calls and
//! still answer with the right status code.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use sqlx::error::ErrorKind;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error, two variants only.
///
/// - `Db`: database/infrastructure errors (logged, mapped to InternalError)
/// - `App`: errors already classified for the client (passed through)
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Database or infrastructure error
    #[error("database error: {0}")]
    Db(BoxError),
    /// Error already carrying the correct ErrorCode
    #[error(transparent)]
    App(AppError),
}

impl ServiceError {
    /// Translate a failed write into the nearest client error.
    ///
    /// Constraint violations the caller can fix become 4xx; everything else
    /// stays a `Db` error. `on_foreign_key` names the error used when a
    /// referenced row is missing.
    pub fn from_write(e: sqlx::Error, on_foreign_key: ErrorCode) -> Self {
        let Some(db_err) = e.as_database_error() else {
            return ServiceError::Db(e.into());
        };

        let app_err = match db_err.kind() {
            ErrorKind::UniqueViolation => AppError::conflict("Resource already exists"),
            ErrorKind::ForeignKeyViolation => AppError::new(on_foreign_key),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                AppError::validation("Invalid data")
            }
            _ => return ServiceError::Db(e.into()),
        };

        let constraint = db_err.constraint().unwrap_or_default().to_string();
        ServiceError::App(
            app_err
                .with_detail("constraint", constraint)
                .with_detail("cause", db_err.message().to_string()),
        )
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
